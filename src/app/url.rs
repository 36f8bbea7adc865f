//! URL normalization for command-line input.

use log::debug;

/// Adds an `http://` prefix when the input has no scheme.
///
/// Anything that already names a scheme is passed through untouched so that
/// `RequestBuilder::set_address` can reject unsupported ones.
///
/// # Arguments
///
/// * `url` - The URL as typed by the user
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        let normalized = format!("http://{trimmed}");
        debug!("No scheme in {trimmed:?}, using {normalized}");
        normalized
    }
}
