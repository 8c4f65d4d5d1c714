pub mod address;
pub mod company;
pub mod draft_field;
pub mod field_errors;
pub mod user_draft;
pub mod user_id;
pub mod user_record;

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
