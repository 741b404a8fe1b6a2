use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::borrow::Cow;

/// Decodes document bytes into text without ever failing.
///
/// 1. UTF-8, switching to UTF-16 when a byte order mark (BOM) is present.
/// 2. On malformed UTF-8, the encoding declared by the XML prolog, if known.
/// 3. Windows-1252, a single-byte superset of Latin-1.
pub(crate) fn decode_text(data: &[u8]) -> Cow<'_, str> {
    let (text, _, malformed) = UTF_8.decode(data);

    if !malformed {
        return text;
    }
    let fallback = declared_encoding(data)
        .filter(|encoding| *encoding != UTF_8)
        .unwrap_or(WINDOWS_1252);

    fallback.decode(data).0
}

/// The encoding named by `<?xml ... encoding="..."?>`, if any.
fn declared_encoding(data: &[u8]) -> Option<&'static Encoding> {
    let prolog = data.strip_prefix(b"<?xml")?;
    let end = prolog.windows(2).position(|window| window == b"?>")?;
    let prolog = &prolog[..end];

    let start = prolog.windows(8).position(|window| window == b"encoding")? + 8;
    let rest = prolog[start..].trim_ascii_start().strip_prefix(b"=")?;
    let rest = rest.trim_ascii_start();
    let quote = *rest.first().filter(|&&quote| quote == b'"' || quote == b'\'')?;
    let label = &rest[1..];
    let label = &label[..label.iter().position(|&byte| byte == quote)?];

    Encoding::for_label(label)
}
