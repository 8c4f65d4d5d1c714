use crate::models::null_as_default;

use serde::{Deserialize, Serialize};

/// Company a user belongs to.
///
/// Remote records carry a structured profile, locally added records carry the
/// plain label typed into the add form. Both decode from the same field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Company {
    Name(String),
    Profile(CompanyProfile),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bs: Option<String>,
}

impl Company {
    /// Display label regardless of shape
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Profile(profile) => &profile.name,
        }
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
