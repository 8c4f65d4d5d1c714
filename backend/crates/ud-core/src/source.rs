use crate::{Result as CoreResult, UserId, UserRecord};

use async_trait::async_trait;

/// Read-only remote source of user records
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch the full user listing, in server order
    async fn fetch_users(&self) -> CoreResult<Vec<UserRecord>>;

    /// Fetch a single user by identifier
    async fn fetch_user(&self, id: &UserId) -> CoreResult<UserRecord>;
}
