//! Category tags for events.
//!
//! Events carry one tag from a small fixed set. The tag drives styling on the
//! presentation surface and is stored as its lowercase name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Work,
    #[default]
    Personal,
    Important,
}

impl EventCategory {
    /// Every category, in menu order.
    pub const ALL: [EventCategory; 3] = [
        EventCategory::Work,
        EventCategory::Personal,
        EventCategory::Important,
    ];

    /// Stored/wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Work => "work",
            EventCategory::Personal => "personal",
            EventCategory::Important => "important",
        }
    }

    /// Human readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Work => "Work",
            EventCategory::Personal => "Personal",
            EventCategory::Important => "Important",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown event category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for EventCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(EventCategory::Work),
            "personal" => Ok(EventCategory::Personal),
            "important" => Ok(EventCategory::Important),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Check if a string is a valid hex color code (`#RGB` or `#RRGGBB`).
pub fn is_valid_hex_color(color: &str) -> bool {
    let color = color.trim();
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
