use crate::util::str::StrExt;

/// Returns the content between `<body ...>` and `</body>`.
///
/// Matching is deliberately loose: tags are found case-insensitively and no
/// markup is validated. If any anchor is missing, the whole document is
/// treated as the body.
pub(crate) fn extract_body(html: &str) -> &str {
    html.find_ignore_case("<body", 0)
        .and_then(|start| html[start..].find('>').map(|gt| start + gt + 1))
        .and_then(|content| {
            html.find_ignore_case("</body", content)
                .map(|end| &html[content..end])
        })
        .unwrap_or(html)
}
