use crate::{DraftField, FieldErrors};

use serde::{Deserialize, Serialize};

/// Input of the add-user operation, as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl UserDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            company: company.into(),
        }
    }

    fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Company => &self.company,
        }
    }

    /// Collect every field problem. An empty result means the draft is valid.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        for field in DraftField::ALL {
            let value = self.value(field);
            if value.trim().is_empty() {
                errors.insert(field, format!("{} is required", field.label()));
            } else if field == DraftField::Email && !is_valid_email(value) {
                errors.insert(field, "Email is invalid");
            }
        }

        errors
    }
}

/// Loose `local@domain.tld` check.
///
/// Accepts any input containing a run of non-whitespace shaped like
/// `x@y.z`: at least one character before the `@`, at least one between the
/// `@` and a later `.`, and at least one after that `.`.
pub fn is_valid_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        let chars: Vec<char> = token.chars().collect();
        let Some(at) = chars.iter().skip(1).position(|c| *c == '@').map(|i| i + 1) else {
            return false;
        };
        chars.len() > at + 3 && chars[at + 2..chars.len() - 1].contains(&'.')
    })
}
