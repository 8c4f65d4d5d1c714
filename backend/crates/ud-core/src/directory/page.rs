use crate::UserId;

use serde::Serialize;

/// Which view the directory is showing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "page", content = "user_id")]
pub enum Page {
    #[default]
    Home,
    Add,
    Details(UserId),
}
