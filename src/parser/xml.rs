use crate::parser::ParserResult;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;

pub(crate) type ByteReader<'a> = Reader<&'a [u8]>;

pub(crate) trait XmlReader<'a> {
    /// Iterator-like method to read the next [`Event`].
    fn next(&mut self) -> Option<ParserResult<Event<'a>>>;

    /// Returns the next start or self-closing element with the local name
    /// `child`, stopping at the end tag of `parent`.
    fn next_child(&mut self, parent: &[u8], child: &[u8]) -> ParserResult<Option<BytesStart<'a>>> {
        while let Some(event) = self.next() {
            match event? {
                Event::Start(el) | Event::Empty(el) if el.is_local_name(child) => {
                    return Ok(Some(el));
                }
                Event::End(el) if el.local_name().as_ref() == parent => break,
                _ => {}
            }
        }
        Ok(None)
    }
}

impl<'a> XmlReader<'a> for ByteReader<'a> {
    fn next(&mut self) -> Option<ParserResult<Event<'a>>> {
        match self.read_event() {
            Ok(Event::Eof) => None,
            result => Some(result),
        }
    }
}

/// Namespace-agnostic element queries.
///
/// Names are compared by local name only, so `opf:item` and `item`
/// are treated the same regardless of the declared namespaces.
pub(crate) trait XmlElement {
    fn is_local_name(&self, local_name: impl AsRef<[u8]>) -> bool;

    /// The unescaped value of the first attribute whose local name is `key`.
    ///
    /// Malformed attributes are skipped rather than reported.
    fn get_attribute(&self, key: impl AsRef<[u8]>) -> Option<String>;
}

impl XmlElement for BytesStart<'_> {
    fn is_local_name(&self, target_local_name: impl AsRef<[u8]>) -> bool {
        self.local_name().as_ref() == target_local_name.as_ref()
    }

    fn get_attribute(&self, key: impl AsRef<[u8]>) -> Option<String> {
        let key = key.as_ref();

        self.attributes()
            .filter_map(Result::ok)
            .find(|attribute| attribute.key.local_name().as_ref() == key)
            .map(|attribute| {
                let raw = String::from_utf8_lossy(&attribute.value).into_owned();

                // Unknown entities are kept verbatim
                quick_xml::escape::unescape(&raw)
                    .map(Cow::into_owned)
                    .unwrap_or(raw)
            })
    }
}
