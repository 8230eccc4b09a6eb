//! Explicit result for keyed reads.

use std::fmt;

/// Outcome of looking a record up by id.
///
/// Absence is a normal outcome rather than an error, but it is spelled out so
/// callers cannot mistake it for an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The record exists.
    Found(T),
    /// No record with this id.
    NotFound { entity: &'static str, id: String },
}

impl<T> Lookup<T> {
    /// Build a not-found outcome.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Lookup::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Wrap an optional value, naming the entity and id for the miss case.
    pub fn from_option(value: Option<T>, entity: &'static str, id: impl Into<String>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::not_found(entity, id),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        !self.is_found()
    }

    /// Take the record, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound { .. } => None,
        }
    }
}

/// Displays the not-found description, e.g. "Task not found: task-9".
impl<T> fmt::Display for Lookup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Found(_) => write!(f, "found"),
            Lookup::NotFound { entity, id } => write!(f, "{} not found: {}", entity, id),
        }
    }
}
