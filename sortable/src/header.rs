//! Column headers registered with a controller.

use tuidom::Element;

use crate::SortConfig;

/// A sortable column header.
///
/// Identified by the id of its element. The field name reported to the
/// callback comes from the explicit field attribute when set, otherwise from
/// the display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Element id.
    pub id: String,
    /// Display text.
    pub text: String,
    /// Explicit field name, if the markup carries one.
    pub field: Option<String>,
}

impl Header {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            field: None,
        }
    }

    /// Set an explicit field name.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Read a header from markup.
    pub fn from_element(element: &Element, config: &SortConfig) -> Self {
        Self {
            id: element.id.clone(),
            text: element.text_content(),
            field: element
                .get_attr(&config.field_attribute)
                .map(str::to_string),
        }
    }

    /// Logical field name for the callback and the sort context.
    pub fn field_name(&self, config: &SortConfig) -> String {
        if let Some(field) = self.field.as_deref().filter(|f| !f.is_empty()) {
            return field.to_string();
        }

        let text = if config.trim_text {
            self.text.trim()
        } else {
            self.text.as_str()
        };
        if config.lowercase_text {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_field_wins() {
        let config = SortConfig::default();
        assert_eq!(Header::new("h", "Age").field("age_years").field_name(&config), "age_years");
    }

    #[test]
    fn empty_field_falls_back_to_text() {
        let config = SortConfig::default();
        assert_eq!(Header::new("h", " Name ").field("").field_name(&config), "name");
    }

    #[test]
    fn text_rules_follow_config() {
        let config = SortConfig::default().lowercase_text(false).trim_text(false);
        assert_eq!(Header::new("h", " Name ").field_name(&config), " Name ");
    }

    #[test]
    fn reads_markup() {
        let config = SortConfig::default();
        let el = Element::row()
            .id("age")
            .attr("fieldname", "age")
            .child(Element::text("Age"));
        let header = Header::from_element(&el, &config);
        assert_eq!(header, Header::new("age", "Age").field("age"));
    }
}
