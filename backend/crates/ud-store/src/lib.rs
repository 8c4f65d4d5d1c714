pub mod error;
pub mod json_file_store;


pub use error::{Result, StoreError};
pub use json_file_store::JsonFileStore;
