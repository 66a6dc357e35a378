//! The site's fixed HTTP boundary and presentation helpers.

pub mod assets;
pub mod fonts;
pub mod media;
pub mod robots;
pub mod router;
pub mod server;
