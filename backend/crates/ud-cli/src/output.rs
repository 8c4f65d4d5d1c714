//! JSON rendering for command results.

use ud_core::{DetailView, FieldErrors, Toast, ToastKind, UserRecord};

use serde::Serialize;
use serde_json::{Value, json};

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

pub fn users_value(users: &[&UserRecord]) -> serde_json::Result<Value> {
    serde_json::to_value(users)
}

/// `{"user": {...}}`, or a null user with a message when nothing was found
pub fn detail_value(view: &DetailView) -> serde_json::Result<Value> {
    Ok(match view.user() {
        Some(user) => json!({ "user": serde_json::to_value(user)? }),
        None => json!({ "user": null, "message": USER_NOT_FOUND_MESSAGE }),
    })
}

pub fn field_errors_value(errors: &FieldErrors) -> serde_json::Result<Value> {
    Ok(json!({ "errors": serde_json::to_value(errors)? }))
}

/// One line for stderr, e.g. `[success] User added successfully!`
pub fn format_toast(toast: &Toast) -> String {
    let kind = match toast.kind {
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    format!("[{}] {}", kind, toast.message)
}
