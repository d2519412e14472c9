pub(crate) mod curves;
pub(crate) mod ease;
pub(crate) mod glyph;
