use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a user record.
///
/// Remote records carry server-assigned integers, locally added records carry
/// a millisecond timestamp. Ids from other sources may be strings. The JSON
/// shape is preserved: numbers stay numbers and strings stay strings, and the
/// two never compare equal (`1` is not `"1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl UserId {
    /// Anything that parses as an integer is numeric, everything else is text
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(s.to_string()),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl FromStr for UserId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}
