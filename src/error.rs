use std::fmt;

use crate::key::{Family, QueryKey};

/// Error returned by the `try_*` queries.
///
/// The plain queries never fail; they fall back to the family default instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No answerer is subscribed under this key.
    NoAnswerer { family: Family, key: QueryKey },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NoAnswerer { family, key } => {
                write!(f, "no {} answerer subscribed for query {}", family, key)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    /// The key that went unanswered.
    pub fn key(&self) -> &QueryKey {
        match self {
            QueryError::NoAnswerer { key, .. } => key,
        }
    }
}
