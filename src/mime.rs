//! Content-type registry: two fixed overrides on top of the default table.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

// Takes precedence over whatever mime_guess's table says for these two.
static OVERRIDES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("js", "text/javascript"), ("css", "text/css")]));

/// Content type for a served path, keyed by the final extension.
pub fn content_type(path: &str) -> &'static str {
    if let Some(ext) = Path::new(path).extension().and_then(|ext| ext.to_str()) {
        if let Some(&content_type) = OVERRIDES.get(ext.to_ascii_lowercase().as_str()) {
            return content_type;
        }
    }
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}
