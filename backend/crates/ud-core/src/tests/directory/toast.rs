use crate::{TOAST_DURATION_MS, Toast, ToastKind};

use chrono::{TimeDelta, TimeZone, Utc};

#[test]
fn test_toast_active_until_duration_elapses() {
    let raised_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let toast = Toast::success("User added successfully!", raised_at);

    assert_eq!(toast.kind, ToastKind::Success);
    assert!(toast.is_active(raised_at));
    assert!(toast.is_active(raised_at + TimeDelta::milliseconds(TOAST_DURATION_MS - 1)));
    assert!(!toast.is_active(raised_at + TimeDelta::milliseconds(TOAST_DURATION_MS)));
}

#[test]
fn test_toast_duration_is_three_seconds() {
    let raised_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let toast = Toast::error("Failed to fetch users", raised_at);

    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.expires_at() - raised_at, TimeDelta::seconds(3));
}
