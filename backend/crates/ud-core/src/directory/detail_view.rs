use crate::{UserId, UserRecord};

/// Outcome of resolving a record for the detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// Found in the working set, no network call made
    Cached(UserRecord),
    /// Fetched from the remote source
    Fetched(UserRecord),
    NotFound(UserId),
}

impl DetailView {
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            Self::Cached(user) | Self::Fetched(user) => Some(user),
            Self::NotFound(_) => None,
        }
    }

    pub fn into_user(self) -> Option<UserRecord> {
        match self {
            Self::Cached(user) | Self::Fetched(user) => Some(user),
            Self::NotFound(_) => None,
        }
    }
}
