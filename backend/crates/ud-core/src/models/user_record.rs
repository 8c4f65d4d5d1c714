use crate::models::null_as_default;
use crate::{Address, Company, UserDraft, UserId};

use serde::{Deserialize, Serialize};

/// A user in the directory, either fetched from the remote source or added
/// locally.
///
/// Serialized in the camelCase shape the remote source and the local store
/// both use. Remote payloads may omit text fields or send them as null,
/// which decode as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    // Provenance
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_local: bool,
}

impl UserRecord {
    /// Build a locally added record from a validated draft
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            username: None,
            email: draft.email,
            phone: draft.phone,
            website: None,
            company: Some(Company::Name(draft.company)),
            address: None,
            is_local: true,
        }
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(Company::name)
    }

    /// Case-insensitive substring match on name or email.
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}
