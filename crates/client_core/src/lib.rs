//! Client-side logic of the record desk: credential gate, record fetching and
//! the filter/sort projection. Nothing here touches the UI toolkit.

pub mod auth;
pub mod error;
pub mod loader;
pub mod projection;
pub mod records;

pub use auth::{AuthState, CredentialGate, LoginOutcome};
pub use error::FetchError;
pub use loader::{spawn_load, LoadCompletion, LoadHandle, LoadResult};
pub use projection::ViewState;
pub use records::{fetch_bytes, HttpRecordSource, RecordSource};
