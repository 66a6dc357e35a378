//! Style-class mapping keyed by text directionality.

use serde::{Deserialize, Serialize};

/// Class names applied by the rendering layer per locale direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FontClasses {
    /// Class for right-to-left locales.
    pub rtl: String,
    /// Class for left-to-right locales.
    pub ltr: String,
}

impl Default for FontClasses {
    fn default() -> Self {
        Self {
            rtl: "font-arabic".to_string(),
            ltr: "font-sans".to_string(),
        }
    }
}

impl FontClasses {
    /// Two-way branch on directionality; no other logic.
    pub fn class_for(&self, rtl: bool) -> &str {
        if rtl {
            &self.rtl
        } else {
            &self.ltr
        }
    }
}
