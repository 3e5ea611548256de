//! Embedded frontend bundle.
//!
//! The pre-built `out/` export is compiled into the binary and exposed as an
//! immutable path → bytes mapping, namespaced under the `out/` virtual root.

use rust_embed::{EmbeddedFile, RustEmbed};

/// Virtual root every request path is rewritten under before lookup.
pub const VIRTUAL_ROOT: &str = "out";

#[derive(RustEmbed)]
#[folder = "out/"]
#[prefix = "out/"]
pub struct Bundle;

/// Resolve a request path against the bundle.
///
/// `/foo/bar.js` is rewritten to `out/foo/bar.js` and looked up directly.
/// Directory-index conventions apply on top: a trailing slash (including the
/// bare root) resolves to the directory's `index.html`, and a path with no
/// direct match falls back to `<path>/index.html`.
pub fn lookup(request_path: &str) -> Option<(String, EmbeddedFile)> {
    let rel = request_path.trim_start_matches('/');
    let mut key = format!("{VIRTUAL_ROOT}/{rel}");
    if key.ends_with('/') {
        key.push_str("index.html");
    }
    if let Some(file) = Bundle::get(&key) {
        return Some((key, file));
    }
    // Directory index without the trailing slash, e.g. `/pitch`.
    let index = format!("{key}/index.html");
    Bundle::get(&index).map(|file| (index, file))
}
