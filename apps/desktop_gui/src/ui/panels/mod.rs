pub mod login;
pub mod records;
