pub mod key_value_store;
pub mod local_records;
pub mod memory_store;

/// Well-known key holding the JSON array of locally added users
pub const LOCAL_USERS_KEY: &str = "localUsers";
