//! Fixed document chrome around composed chapters,
//! plus the standalone pages a host shows around a preview.

use std::error::Error;
use std::fmt::Write;

/// Default styling for readable long-form text.
pub const DEFAULT_STYLESHEET: &str = "\
:root { color-scheme: light dark; }
body { font: 1rem/1.6 system-ui, -apple-system, \"Segoe UI\", sans-serif; padding: 24px; margin: 0; }
.chapter { margin: 40px 0; }
img, svg, video, iframe { max-width: 100%; height: auto; }
h1, h2, h3, h4 { line-height: 1.25; }
blockquote { border-inline-start: 3px solid color-mix(in srgb, currentColor 20%, transparent); padding-inline-start: 12px; margin-inline: 0; color: color-mix(in srgb, currentColor 80%, black); }
code, pre { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; }
";

/// Class shared by every chapter section.
pub(crate) const CHAPTER_CLASS: &str = "chapter";

/// Appends one chapter section with the id `ch{index}`.
pub(crate) fn push_chapter(out: &mut String, index: usize, content: &str) {
    // Writing into a `String` cannot fail
    let _ = write!(
        out,
        "\n<section class=\"{CHAPTER_CLASS}\" id=\"ch{index}\">\n{content}\n</section>\n"
    );
}

/// Wraps the composed chapter sections in the document shell.
pub(crate) fn assemble(stylesheet: &str, sections: &str) -> String {
    format!(
        "<!doctype html>
<html>
<head>
    <meta charset=\"utf-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1, viewport-fit=cover\">
    <style>{stylesheet}</style>
</head>
<body>
    <div id=\"content\">{sections}</div>
</body>
</html>
"
    )
}

/// A minimal page to display while a preview is being prepared.
pub fn loading_page() -> String {
    simple_page("<p>Loading EPUB\u{2026}</p>")
}

/// A human-readable page describing `error` and its chain of causes.
///
/// All error text is HTML-escaped.
pub fn error_page(error: &dyn Error) -> String {
    let mut description = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let _ = write!(description, "\n\nCaused by: {cause}");
        source = cause.source();
    }

    simple_page(&format!(
        "<h3>EPUB Preview Error</h3>\n<pre>{}</pre>",
        quick_xml::escape::escape(description.as_str())
    ))
}

fn simple_page(content: &str) -> String {
    format!(
        "<!doctype html>
<html>
<head><meta charset=\"utf-8\"></head>
<body style=\"font-family: system-ui, sans-serif; padding: 24px\">
{content}
</body>
</html>
"
    )
}
