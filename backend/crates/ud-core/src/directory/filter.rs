use crate::UserRecord;

/// Users whose name or email contains `query`, ignoring case.
///
/// An empty query keeps everything. Relative order is preserved.
pub fn filter_users<'a>(users: &'a [UserRecord], query: &str) -> Vec<&'a UserRecord> {
    if query.is_empty() {
        return users.iter().collect();
    }

    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| user.matches_lowercase(&needle))
        .collect()
}
