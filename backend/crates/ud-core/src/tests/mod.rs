mod directory;
mod models;
mod store;

use crate::{CoreError, DirectorySource, Result as CoreResult, UserId, UserRecord};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Remote user as the listing endpoint returns it
pub(crate) fn remote_user(id: i64, name: &str, email: &str) -> UserRecord {
    UserRecord {
        id: UserId::Number(id),
        name: name.to_string(),
        username: None,
        email: email.to_string(),
        phone: String::from("1-770-736-8031"),
        website: None,
        company: None,
        address: None,
        is_local: false,
    }
}

/// Locally added user as the local store holds it
pub(crate) fn local_user(id: i64, name: &str, email: &str) -> UserRecord {
    UserRecord {
        is_local: true,
        ..remote_user(id, name, email)
    }
}

/// In-process stand-in for the remote directory
pub(crate) struct StubSource {
    listing: Result<Vec<UserRecord>, String>,
    singles: Vec<UserRecord>,
    single_calls: AtomicUsize,
}

impl StubSource {
    pub(crate) fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            listing: Ok(users),
            singles: Vec::new(),
            single_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            listing: Err(String::from("connection refused")),
            singles: Vec::new(),
            single_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_single(mut self, user: UserRecord) -> Self {
        self.singles.push(user);
        self
    }

    pub(crate) fn single_calls(&self) -> usize {
        self.single_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectorySource for StubSource {
    async fn fetch_users(&self) -> CoreResult<Vec<UserRecord>> {
        self.listing
            .clone()
            .map_err(|message| CoreError::remote(message))
    }

    async fn fetch_user(&self, id: &UserId) -> CoreResult<UserRecord> {
        self.single_calls.fetch_add(1, Ordering::SeqCst);
        self.singles
            .iter()
            .find(|user| &user.id == id)
            .cloned()
            .ok_or_else(|| CoreError::remote(format!("user {} not found", id)))
    }
}
