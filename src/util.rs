pub(crate) mod str;
pub(crate) mod uri;
pub(crate) mod utf;
