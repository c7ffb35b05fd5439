//! Serializable snapshot of the active sort selection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Result, SortError, SortMode};

/// Mapping of field name to sort mode.
///
/// Produced by [`SortController::context`](crate::SortController::context)
/// and consumed by [`SortController::set_context`](crate::SortController::set_context).
/// Serializes as a plain object, e.g. `{"age":"descending"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortContext(BTreeMap<String, SortMode>);

impl SortContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with a single entry.
    pub fn single(field: impl Into<String>, mode: SortMode) -> Self {
        let mut context = Self::new();
        context.insert(field, mode);
        context
    }

    pub fn insert(&mut self, field: impl Into<String>, mode: SortMode) -> Option<SortMode> {
        self.0.insert(field.into(), mode)
    }

    pub fn get(&self, field: &str) -> Option<SortMode> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SortMode)> {
        self.0.iter().map(|(field, mode)| (field.as_str(), *mode))
    }

    /// The only entry, `None` when empty.
    ///
    /// Fails with [`SortError::AmbiguousContext`] when several entries are present.
    pub fn entry(&self) -> Result<Option<(&str, SortMode)>> {
        match self.0.len() {
            0 => Ok(None),
            1 => Ok(self.iter().next()),
            count => Err(SortError::AmbiguousContext { count }),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, SortMode)> for SortContext {
    fn from_iter<I: IntoIterator<Item = (S, SortMode)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(field, mode)| (field.into(), mode)).collect())
    }
}
