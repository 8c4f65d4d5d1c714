//! Core of the user directory: the user model, draft validation, and the
//! state manager that merges remote and locally added users.

pub mod directory;
pub mod error;
pub mod models;
pub mod source;
pub mod store;

#[cfg(test)]
mod tests;

pub use directory::action::Action;
pub use directory::detail_view::DetailView;
pub use directory::directory::Directory;
pub use directory::directory_state::DirectoryState;
pub use directory::filter::filter_users;
pub use directory::page::Page;
pub use directory::toast::{TOAST_DURATION_MS, Toast, ToastKind};
pub use directory::{FETCH_FAILED_MESSAGE, USER_ADDED_MESSAGE};
pub use error::{CoreError, Result};
pub use models::address::Address;
pub use models::company::{Company, CompanyProfile};
pub use models::draft_field::DraftField;
pub use models::field_errors::FieldErrors;
pub use models::user_draft::{UserDraft, is_valid_email};
pub use models::user_id::UserId;
pub use models::user_record::UserRecord;
pub use source::DirectorySource;
pub use store::LOCAL_USERS_KEY;
pub use store::key_value_store::KeyValueStore;
pub use store::local_records::LocalRecords;
pub use store::memory_store::MemoryStore;
