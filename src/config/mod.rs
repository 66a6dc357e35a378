mod loader;

pub use loader::ConfigError;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::site::fonts::FontClasses;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub robots: RobotsConfig,
    pub fonts: FontClasses,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the site endpoints bind to. When the port is busy the server
    /// scans upward from it.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Site identity and fixed asset targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base origin for absolute URLs (sitemap root).
    pub base_url: String,
    /// Absolute URL the /og route redirects to.
    pub og_image_url: String,
    /// Optional analytics script the rendering layer injects. Probed at
    /// startup; absence is non-fatal.
    pub analytics_script: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.com".to_string(),
            og_image_url: "https://example.com/images/og.png".to_string(),
            analytics_script: None,
        }
    }
}

/// Allow/Disallow rules emitted into robots.txt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            allow: vec!["/".to_string()],
            disallow: vec!["/private/".to_string()],
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server
            .bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| ConfigError::ValidationError {
                message: format!("invalid bind_addr '{}': {}", self.server.bind_addr, err),
            })?;

        for (name, url) in [
            ("base_url", &self.site.base_url),
            ("og_image_url", &self.site.og_image_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be an absolute http(s) URL, got '{url}'"),
                });
            }
        }

        for rule in self.robots.allow.iter().chain(&self.robots.disallow) {
            if !rule.starts_with('/') {
                return Err(ConfigError::ValidationError {
                    message: format!("robots rule '{rule}' must start with '/'"),
                });
            }
        }

        Ok(())
    }
}
