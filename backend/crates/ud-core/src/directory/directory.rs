use crate::{
    Action, CoreError, DetailView, DirectorySource, DirectoryState, FETCH_FAILED_MESSAGE,
    KeyValueStore, LocalRecords, Page, Result as CoreResult, Toast, USER_ADDED_MESSAGE,
    UserDraft, UserId, UserRecord,
};

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

/// Owns the working set and the local store, and is the only thing that
/// mutates either.
pub struct Directory<S: KeyValueStore> {
    store: S,
    state: DirectoryState,
    last_issued_id: i64,
}

impl<S: KeyValueStore> Directory<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: DirectoryState::default(),
            last_issued_id: 0,
        }
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn dispatch(&mut self, action: Action) {
        debug!("dispatch {:?}", action);
        self.state.apply(action);
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Populate the working set from the local store and the remote source.
    ///
    /// Both reads run concurrently. The result is every persisted local record
    /// in stored order followed by every remote record in fetch order. A
    /// failed fetch raises an error notification and leaves only the local
    /// portion.
    pub async fn initialize(&mut self, source: &dyn DirectorySource) {
        self.dispatch(Action::LoadStarted);

        let store = &self.store;
        let (remote, local) = futures::join!(source.fetch_users(), async {
            LocalRecords::load(store)
        });

        info!("Loaded {} local users", local.len());
        self.dispatch(Action::LocalLoaded(local));

        match remote {
            Ok(users) => {
                info!("Fetched {} remote users", users.len());
                self.dispatch(Action::RemoteLoaded(users));
            }
            Err(e) => {
                error!("Failed to fetch users: {}", e);
                self.dispatch(Action::RemoteFailed);
                self.dispatch(Action::ToastRaised(Toast::error(
                    FETCH_FAILED_MESSAGE,
                    Utc::now(),
                )));
            }
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Validate and add a user, stamped with the current time
    pub fn add_record(&mut self, draft: UserDraft) -> CoreResult<UserRecord> {
        self.add_record_at(draft, Utc::now())
    }

    /// Validate and add a user as if called at `now`.
    ///
    /// On validation failure nothing changes. On success the record goes to
    /// the front of the working set and of the persisted collection. A failed
    /// write is logged; the in-memory add stands.
    pub fn add_record_at(&mut self, draft: UserDraft, now: DateTime<Utc>) -> CoreResult<UserRecord> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(CoreError::validation(errors));
        }

        let id = self.next_id(now.timestamp_millis());
        let record = UserRecord::from_draft(id, draft);
        info!("Adding local user {} ({})", record.id, record.email);

        self.dispatch(Action::RecordAdded(record.clone()));

        if let Err(e) = LocalRecords::prepend(&mut self.store, &record) {
            error!("Failed to persist local user {}: {}", record.id, e);
        }

        self.dispatch(Action::ToastRaised(Toast::success(USER_ADDED_MESSAGE, now)));
        self.dispatch(Action::Navigated(Page::Home));

        Ok(record)
    }

    /// Millisecond id, bumped until it is past the last one issued and unused
    /// in the working set.
    fn next_id(&mut self, now_millis: i64) -> UserId {
        let mut candidate = now_millis.max(self.last_issued_id.saturating_add(1));
        while self.state.contains_id(&UserId::Number(candidate)) {
            candidate += 1;
        }
        self.last_issued_id = candidate;
        UserId::Number(candidate)
    }

    // =========================================================================
    // View inputs
    // =========================================================================

    pub fn set_search<T: Into<String>>(&mut self, term: T) {
        self.dispatch(Action::SearchChanged(term.into()));
    }

    pub fn navigate(&mut self, page: Page) {
        self.dispatch(Action::Navigated(page));
    }

    pub fn visible_users(&self) -> Vec<&UserRecord> {
        self.state.visible_users()
    }

    /// Drop the notification once its display time is over
    pub fn dismiss_expired(&mut self, now: DateTime<Utc>) {
        let expired = self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| !toast.is_active(now));
        if expired {
            self.dispatch(Action::ToastDismissed);
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Resolve a record for the detail page.
    ///
    /// Uses the working set when possible, otherwise asks the remote source
    /// once. Any fetch failure becomes `NotFound`.
    pub async fn lookup(&self, id: &UserId, source: &dyn DirectorySource) -> DetailView {
        if let Some(user) = self.state.find(id) {
            return DetailView::Cached(user.clone());
        }

        match source.fetch_user(id).await {
            Ok(user) => DetailView::Fetched(user),
            Err(e) => {
                warn!("Error fetching user details for {}: {}", id, e);
                DetailView::NotFound(id.clone())
            }
        }
    }
}
