//! Query keys — the unit of subscription and lookup.
//!
//! A key pairs a query name with the declared result type. The result type is
//! compared by `TypeId`, so `("score", i32)` and `("score", f32)` never see each
//! other's answerers.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The aggregation family a subscriber collection belongs to.
///
/// Each family owns an independent keyed collection, so the same key under two
/// families still names two different subscriber sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// sum / min / max over `Number` answers.
    Numeric,
    /// or / and over `BoolAnswer`s.
    Boolean,
    /// weighted vote over `VoteAnswer<T>`s.
    Vote,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Numeric => write!(f, "numeric"),
            Family::Boolean => write!(f, "boolean"),
            Family::Vote => write!(f, "vote"),
        }
    }
}

/// Identity of a query: name plus declared result type.
///
/// Equality and hashing only look at the name and the result `TypeId`; the
/// type name is carried along for logs and error messages.
#[derive(Clone)]
pub struct QueryKey {
    name: String,
    result_type: TypeId,
    result_type_name: &'static str,
}

impl QueryKey {
    /// Build the key for a query named `name` whose answers are of type `T`.
    pub fn of<T: 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result_type: TypeId::of::<T>(),
            result_type_name: type_name::<T>(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn result_type(&self) -> TypeId {
        self.result_type
    }

    pub fn result_type_name(&self) -> &'static str {
        self.result_type_name
    }
}

impl PartialEq for QueryKey {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.result_type == other.result_type
    }
}

impl Eq for QueryKey {}

impl Hash for QueryKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.result_type.hash(state);
    }
}

impl fmt::Debug for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryKey")
            .field("name", &self.name)
            .field("result_type", &self.result_type_name)
            .finish()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.name, self.result_type_name)
    }
}
