pub mod action;
pub mod detail_view;
pub mod directory;
pub mod directory_state;
pub mod filter;
pub mod page;
pub mod toast;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";
pub const USER_ADDED_MESSAGE: &str = "User added successfully!";
