//! Best-effort checks for optional static resources.

use std::path::Path;

use tracing::warn;

/// Whether `path` exists, warning when it does not.
///
/// Absence of an optional resource is logged and skipped, never fatal; no
/// retries.
pub fn probe_optional_asset(label: &str, path: &Path) -> bool {
    if path.exists() {
        true
    } else {
        warn!(label, path = %path.display(), "optional asset missing, skipping");
        false
    }
}
