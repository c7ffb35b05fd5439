use thiserror::Error;

/// Errors reported by the sort controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A context names a field that no registered header resolves to.
    #[error("No sortable header with field name '{0}'")]
    UnknownField(String),

    /// A context carries more than one active field.
    #[error("Sort context must hold at most one field, got {count}")]
    AmbiguousContext {
        /// Number of entries supplied.
        count: usize,
    },

    /// The container id is not present in the document.
    #[error("Container '{0}' not found in document")]
    UnknownContainer(String),

    /// A sort mode name that is not `ascending`, `descending` or `unsorted`.
    #[error("Invalid sort mode '{0}'")]
    InvalidMode(String),
}
