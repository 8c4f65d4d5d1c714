use crate::{Action, Page, Toast, UserId, UserRecord, filter_users};

use chrono::{DateTime, Utc};

/// Everything the view layer reads
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    /// Working set: local additions first, then remote records
    pub users: Vec<UserRecord>,
    pub loading: bool,
    pub search_term: String,
    pub page: Page,
    pub toast: Option<Toast>,
}

impl DirectoryState {
    /// Reducer. Loads are additive so the local and remote arrivals can land
    /// in either order without erasing each other.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LoadStarted => self.loading = true,
            Action::RemoteLoaded(users) => {
                self.users.extend(users);
                self.loading = false;
            }
            Action::RemoteFailed => self.loading = false,
            Action::LocalLoaded(users) => {
                self.users.splice(0..0, users);
            }
            Action::RecordAdded(record) => self.users.insert(0, record),
            Action::SearchChanged(term) => self.search_term = term,
            Action::Navigated(page) => self.page = page,
            Action::ToastRaised(toast) => self.toast = Some(toast),
            Action::ToastDismissed => self.toast = None,
        }
    }

    /// Working set narrowed by the current search term
    pub fn visible_users(&self) -> Vec<&UserRecord> {
        filter_users(&self.users, &self.search_term)
    }

    pub fn find(&self, id: &UserId) -> Option<&UserRecord> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn contains_id(&self, id: &UserId) -> bool {
        self.find(id).is_some()
    }

    /// The current notification, unless it has already expired
    pub fn active_toast(&self, now: DateTime<Utc>) -> Option<&Toast> {
        self.toast.as_ref().filter(|toast| toast.is_active(now))
    }
}
