use crate::util::str::StrExt;
use crate::util::uri;
use std::path::Path;

/// Attribute patterns, applied in order.
const PATTERNS: [&str; 2] = ["src=\"", "href=\""];

/// Values that already resolve on their own, or point within the document.
const UNTOUCHED_PREFIXES: &[&str] = &[
    // Covers `https:` too; relative names such as `httpd.xhtml` are kept as well
    "http",
    "file:",
    "data:",
    "mailto:",
    "javascript:",
    "#",
    // Network-path reference (`//host/path`)
    "//",
];

/// Rewrites document-relative `src` and `href` values into `file://` URLs
/// resolvable from `base`.
///
/// Only double-quoted values are recognized; single-quoted or unquoted
/// values pass through as is.
pub(crate) fn rewrite_resource_urls(html: &str, base: &Path) -> String {
    PATTERNS
        .iter()
        .fold(html.to_owned(), |html, pattern| rewrite_attribute(&html, pattern, base))
}

/// Single pass over `html` for one attribute `pattern`.
///
/// Only the quoted value span is replaced; all other text is copied verbatim.
fn rewrite_attribute(html: &str, pattern: &str, base: &Path) -> String {
    let mut rewritten = String::with_capacity(html.len());
    // Everything before `copied` has been written to `rewritten`
    let mut copied = 0;
    let mut search = 0;

    while let Some(start) = html.find_ignore_case(pattern, search) {
        let value_start = start + pattern.len();
        // An unterminated value ends the pass
        let Some(length) = html[value_start..].find('"') else {
            break;
        };
        let value_end = value_start + length;

        if let Some(url) = rewrite_value(&html[value_start..value_end], base) {
            rewritten.push_str(&html[copied..value_start]);
            rewritten.push_str(&url);
            copied = value_end;
        }
        // Resume after the closing quote
        search = value_end + 1;
    }
    rewritten.push_str(&html[copied..]);
    rewritten
}

/// Returns the `file://` form of `value`,
/// or [`None`] if the value is left untouched.
fn rewrite_value(value: &str, base: &Path) -> Option<String> {
    if value.is_empty()
        || UNTOUCHED_PREFIXES
            .iter()
            .any(|prefix| value.starts_with_ignore_case(prefix))
    {
        return None;
    }
    let (path, suffix) = uri::split_suffix(value);
    let mut url = uri::to_file_url(&uri::resolve(base, path));

    url.push_str(suffix);
    Some(url)
}
