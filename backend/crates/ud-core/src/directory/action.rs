use crate::{Page, Toast, UserRecord};

/// State transitions of the directory. Applied by `DirectoryState::apply`.
#[derive(Debug, Clone)]
pub enum Action {
    LoadStarted,
    /// Remote listing arrived; appended after whatever is already held
    RemoteLoaded(Vec<UserRecord>),
    RemoteFailed,
    /// Persisted local users arrived; spliced in front of the working set
    LocalLoaded(Vec<UserRecord>),
    RecordAdded(UserRecord),
    SearchChanged(String),
    Navigated(Page),
    ToastRaised(Toast),
    ToastDismissed,
}
