//! Markup names and field-name rules for a sortable header row.

/// Configuration for a [`SortController`](crate::SortController).
///
/// # Examples
///
/// ```
/// use sortable::SortConfig;
///
/// let config = SortConfig::default()
///     .marker_class("sort-header")
///     .field_attribute("data-field")
///     .lowercase_text(false);
/// assert_eq!(config.marker_class, "sort-header");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Class that marks an element as a sortable header.
    pub marker_class: String,
    /// Attribute holding an explicit field name.
    pub field_attribute: String,
    /// Lowercase the display text when it is used as the field name.
    pub lowercase_text: bool,
    /// Trim surrounding whitespace from the display text.
    pub trim_text: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            marker_class: "sortable".to_string(),
            field_attribute: "fieldname".to_string(),
            lowercase_text: true,
            trim_text: true,
        }
    }
}

impl SortConfig {
    pub fn marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }

    pub fn field_attribute(mut self, name: impl Into<String>) -> Self {
        self.field_attribute = name.into();
        self
    }

    pub fn lowercase_text(mut self, lowercase: bool) -> Self {
        self.lowercase_text = lowercase;
        self
    }

    pub fn trim_text(mut self, trim: bool) -> Self {
        self.trim_text = trim;
        self
    }
}
