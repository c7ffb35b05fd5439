//! Sort states and their cycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SortError;

/// Sort state of a single header.
///
/// Clicking a header advances it through
/// `Ascending -> Descending -> Unsorted -> Ascending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Ascending,
    Descending,
    Unsorted,
}

impl SortMode {
    /// All modes in cycle order.
    pub const ALL: [SortMode; 3] = [SortMode::Ascending, SortMode::Descending, SortMode::Unsorted];

    /// The mode one click later.
    pub fn next(self) -> Self {
        match self {
            SortMode::Ascending => SortMode::Descending,
            SortMode::Descending => SortMode::Unsorted,
            SortMode::Unsorted => SortMode::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Ascending => "ascending",
            SortMode::Descending => "descending",
            SortMode::Unsorted => "unsorted",
        }
    }

    /// Marker class carried by a header element in this mode.
    pub fn marker(self) -> &'static str {
        self.as_str()
    }

    /// Header suffix for rendering.
    pub fn indicator(self) -> &'static str {
        match self {
            SortMode::Ascending => "▲",
            SortMode::Descending => "▼",
            SortMode::Unsorted => "",
        }
    }

    /// Whether this mode orders the data (anything but `Unsorted`).
    pub fn is_active(self) -> bool {
        self != SortMode::Unsorted
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| SortError::InvalidMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_period_three() {
        for mode in SortMode::ALL {
            assert_eq!(mode.next().next().next(), mode);
        }
        assert_eq!(SortMode::Unsorted.next(), SortMode::Ascending);
    }

    #[test]
    fn indicator_marks_active_modes_only() {
        assert_eq!(SortMode::Ascending.indicator(), "▲");
        assert_eq!(SortMode::Descending.indicator(), "▼");
        assert_eq!(SortMode::Unsorted.indicator(), "");
        for mode in SortMode::ALL {
            assert_eq!(mode.is_active(), !mode.indicator().is_empty());
        }
    }

    #[test]
    fn parse_and_display() {
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>(), Ok(mode));
        }
        assert_eq!(
            "Ascending".parse::<SortMode>(),
            Err(SortError::InvalidMode("Ascending".to_string()))
        );
    }
}
