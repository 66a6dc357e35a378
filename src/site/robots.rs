//! robots.txt body generation.

use crate::config::RobotsConfig;

/// Render the robots directive text.
///
/// Allow/Disallow rules come from config; the sitemap URL is rooted at the
/// site's base origin.
pub fn robots_body(base_url: &str, robots: &RobotsConfig) -> String {
    let mut body = String::from("User-Agent: *\n");
    for rule in &robots.allow {
        body.push_str("Allow: ");
        body.push_str(rule);
        body.push('\n');
    }
    for rule in &robots.disallow {
        body.push_str("Disallow: ");
        body.push_str(rule);
        body.push('\n');
    }
    body.push('\n');
    body.push_str("Sitemap: ");
    body.push_str(base_url.trim_end_matches('/'));
    body.push_str("/sitemap.xml\n");
    body
}
