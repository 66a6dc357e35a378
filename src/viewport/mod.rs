//! Viewport width classification.
//!
//! Maps a viewport width in pixels to one of three device classes. The
//! thresholds are the same breakpoints the site's stylesheets use, so layout
//! decisions made here agree with what CSS does.

pub mod provider;
pub mod terminal;
pub mod watcher;

pub use provider::{ResizeListener, Subscription, ViewportProvider};
pub use terminal::TerminalViewport;
pub use watcher::DeviceWatcher;

use std::fmt;

/// Widths below this are phones.
pub const TABLET_MIN_WIDTH: u32 = 768;
/// Widths at or above this are desktops.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// Three-way classification of a viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a viewport width in pixels.
///
/// Total over `u32`: every width maps to exactly one class.
pub fn classify(width: u32) -> DeviceClass {
    if width < TABLET_MIN_WIDTH {
        DeviceClass::Mobile
    } else if width < DESKTOP_MIN_WIDTH {
        DeviceClass::Tablet
    } else {
        DeviceClass::Desktop
    }
}
