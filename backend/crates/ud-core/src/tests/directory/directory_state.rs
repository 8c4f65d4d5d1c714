use crate::tests::{local_user, remote_user};
use crate::{Action, DirectoryState, Page, Toast, UserId};

use chrono::{TimeDelta, Utc};

fn ids(state: &DirectoryState) -> Vec<String> {
    state.users.iter().map(|user| user.id.to_string()).collect()
}

#[test]
fn given_local_then_remote_when_applied_then_local_first() {
    let mut state = DirectoryState::default();

    state.apply(Action::LoadStarted);
    state.apply(Action::LocalLoaded(vec![
        local_user(200, "B", "b@x.io"),
        local_user(100, "A", "a@x.io"),
    ]));
    state.apply(Action::RemoteLoaded(vec![
        remote_user(1, "One", "one@x.io"),
        remote_user(2, "Two", "two@x.io"),
    ]));

    assert_eq!(ids(&state), vec!["200", "100", "1", "2"]);
    assert!(!state.loading);
}

#[test]
fn given_remote_then_local_when_applied_then_local_still_first() {
    let mut state = DirectoryState::default();

    state.apply(Action::LoadStarted);
    state.apply(Action::RemoteLoaded(vec![
        remote_user(1, "One", "one@x.io"),
        remote_user(2, "Two", "two@x.io"),
    ]));
    state.apply(Action::LocalLoaded(vec![
        local_user(200, "B", "b@x.io"),
        local_user(100, "A", "a@x.io"),
    ]));

    assert_eq!(ids(&state), vec!["200", "100", "1", "2"]);
}

#[test]
fn given_same_name_in_both_sources_when_merged_then_both_kept() {
    let mut state = DirectoryState::default();

    state.apply(Action::LocalLoaded(vec![local_user(
        500,
        "Leanne Graham",
        "Sincere@april.biz",
    )]));
    state.apply(Action::RemoteLoaded(vec![remote_user(
        1,
        "Leanne Graham",
        "Sincere@april.biz",
    )]));

    assert_eq!(state.users.len(), 2);
}

#[test]
fn test_load_started_sets_loading_and_failure_clears_it() {
    let mut state = DirectoryState::default();

    state.apply(Action::LoadStarted);
    assert!(state.loading);

    state.apply(Action::RemoteFailed);
    assert!(!state.loading);
    assert!(state.users.is_empty());
}

#[test]
fn test_record_added_goes_to_front() {
    let mut state = DirectoryState::default();
    state.apply(Action::RemoteLoaded(vec![remote_user(1, "One", "one@x.io")]));

    state.apply(Action::RecordAdded(local_user(900, "New", "new@x.io")));

    assert_eq!(ids(&state), vec!["900", "1"]);
}

#[test]
fn test_visible_users_follow_search_term() {
    let mut state = DirectoryState::default();
    state.apply(Action::RemoteLoaded(vec![
        remote_user(1, "Leanne Graham", "Sincere@april.biz"),
        remote_user(2, "Ervin Howell", "Shanna@melissa.tv"),
    ]));

    state.apply(Action::SearchChanged("ervin".into()));
    assert_eq!(state.visible_users().len(), 1);

    state.apply(Action::SearchChanged(String::new()));
    assert_eq!(state.visible_users().len(), 2);
}

#[test]
fn test_find_and_navigation() {
    let mut state = DirectoryState::default();
    state.apply(Action::RemoteLoaded(vec![remote_user(1, "One", "one@x.io")]));

    assert!(state.contains_id(&UserId::Number(1)));
    assert!(!state.contains_id(&UserId::Text("1".into())));

    state.apply(Action::Navigated(Page::Details(UserId::Number(1))));
    assert_eq!(state.page, Page::Details(UserId::Number(1)));
}

#[test]
fn test_active_toast_hides_expired() {
    let mut state = DirectoryState::default();
    let raised_at = Utc::now();
    state.apply(Action::ToastRaised(Toast::success("done", raised_at)));

    assert!(state.active_toast(raised_at).is_some());
    assert!(state.active_toast(raised_at + TimeDelta::seconds(4)).is_none());

    state.apply(Action::ToastDismissed);
    assert!(state.toast.is_none());
}
