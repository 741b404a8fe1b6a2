use percent_encoding::{AsciiSet, CONTROLS};
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Characters escaped when a filesystem path is rendered as a `file://` URL.
const FILE_URL: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) fn decode(encoded: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(encoded).decode_utf8_lossy()
}

/// Splits an href into its path and its `?query#fragment` suffix.
///
/// `chapter.xhtml?q=1#part` -> (`chapter.xhtml`, `?q=1#part`)
pub(crate) fn split_suffix(href: &str) -> (&str, &str) {
    href.find(['?', '#'])
        .map(|position| href.split_at(position))
        .unwrap_or((href, ""))
}

/// Resolves a percent-encoded href against `base`.
///
/// A single leading `/` is treated as package-root-relative and removed,
/// so the result never escapes to the filesystem root through the href alone.
pub(crate) fn resolve(base: &Path, href: &str) -> PathBuf {
    let relative = href.strip_prefix('/').unwrap_or(href);
    let decoded = decode(relative);

    normalize(&base.join(decoded.as_ref()))
}

/// Lexically normalizes `path`, removing `.` and resolving `..` components.
///
/// The filesystem is never consulted; `..` cannot climb above the root.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut stack = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => match stack.last() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                // Relative paths keep their leading `..` segments
                None | Some(Component::ParentDir) => stack.push(component),
                // No content may come before the root when present
                _ => {}
            },
            Component::CurDir => {}
            _ => stack.push(component),
        }
    }

    PathBuf::from_iter(stack)
}

/// Renders an absolute filesystem path as a percent-encoded `file://` URL.
pub(crate) fn to_file_url(path: &Path) -> String {
    // Ensure separators are forward slashes.
    let path = path.to_string_lossy().replace('\\', "/");
    let mut url = String::with_capacity(path.len() + 8);

    url.push_str("file://");
    // Windows drive paths (`C:/...`) still need the empty authority.
    if !path.starts_with('/') {
        url.push('/');
    }
    url.extend(percent_encoding::utf8_percent_encode(&path, FILE_URL));
    url
}

/// Returns `true` if the extension of `path` matches any of `extensions`,
/// ignoring ASCII case.
pub(crate) fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            extensions
                .iter()
                .any(|candidate| extension.eq_ignore_ascii_case(candidate))
        })
}
