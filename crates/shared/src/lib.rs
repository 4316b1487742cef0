pub mod domain;

/// Endpoint serving the record list as a JSON array.
pub const RECORDS_URL: &str = "https://coralmango.com/api/react-test";

/// Placeholder avatar drawn on every record card.
pub const AVATAR_URL: &str = "https://static.vecteezy.com/system/resources/previews/002/400/532/non_2x/young-happy-businessman-character-avatar-wearing-business-outfit-isolated-free-vector.jpg";
