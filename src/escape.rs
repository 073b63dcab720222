use regex::{Captures, Regex};
use std::sync::LazyLock;

/// An ampersand, plus the entity it already starts if there is one.
static AMPERSAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&((?:amp|lt|gt|quot|apos|#[0-9]+|#x[0-9a-fA-F]+);)?").unwrap()
});

/// Escape a URL for embedding as XML text or attribute content.
///
/// Every `&` that does not already start a predefined or numeric entity
/// becomes `&amp;`. Applying it twice gives the same result as once.
pub fn escape_url_for_xml(url: &str) -> String {
    AMPERSAND_RE
        .replace_all(url, |caps: &Captures<'_>| {
            if caps.get(1).is_some() {
                caps[0].to_string()
            } else {
                "&amp;".to_string()
            }
        })
        .into_owned()
}
