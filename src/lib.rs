//! minbar — serving shell for a content-presentation site.
//!
//! Two halves: a responsive-layout toolkit (viewport width classification
//! driven by resize notifications) consumed by the rendering layer, and the
//! site's fixed HTTP boundary (robots.txt, OG-image redirect, health).

pub mod config;
pub mod logging;
pub mod shutdown;
pub mod site;
pub mod viewport;

pub use viewport::{classify, DeviceClass};
