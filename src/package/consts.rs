// Paths
pub(crate) const CONTAINER: &str = "META-INF/container.xml";

// Extensions
pub(crate) const PACKAGE_EXTENSIONS: &[&str] = &["opf"];
pub(crate) const CHAPTER_EXTENSIONS: &[&str] = &["xhtml", "html", "htm"];

// Attributes
pub(crate) const ID: &str = "id";
pub(crate) const HREF: &str = "href";
pub(crate) const IDREF: &str = "idref";
pub(crate) const FULL_PATH: &str = "full-path";

// Elements, matched by local name
pub(crate) mod bytes {
    pub(crate) const ROOT_FILE: &[u8] = b"rootfile";
    pub(crate) const MANIFEST: &[u8] = b"manifest";
    pub(crate) const SPINE: &[u8] = b"spine";
    pub(crate) const ITEM: &[u8] = b"item";
    pub(crate) const ITEMREF: &[u8] = b"itemref";
}
