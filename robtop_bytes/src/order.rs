//! Explicit byte order selection.

/// Byte order used for multi-byte fields.
///
/// There is no global byte order: every read and write names one, and
/// callers that do not care use [`ByteOrder::default`] (little-endian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}
