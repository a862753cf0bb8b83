//! Codec options.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::{ByteOrder, FormatError, Result};

/// Text encoding used for string content inside binary records.
///
/// Wraps an [`encoding_rs`] encoding so that it can be picked by name:
///
/// ```
/// use robtop_bytes::TextEncoding;
///
/// let latin = TextEncoding::for_label("latin1")?;
/// assert_eq!(latin.name(), "windows-1252");
/// assert!(TextEncoding::for_label("klingon").is_err());
/// # Ok::<(), robtop_bytes::FormatError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl Default for TextEncoding {
    fn default() -> Self {
        Self(UTF_8)
    }
}

impl TextEncoding {
    /// Look up an encoding by its WHATWG label (`"utf-8"`, `"latin1"`, ...).
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.trim().as_bytes())
            .map(Self)
            .ok_or_else(|| FormatError::unknown_encoding(label))
    }

    /// Canonical name of the encoding.
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// Decode bytes, failing on any malformed sequence.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        let (text, had_errors) = self.0.decode_without_bom_handling(bytes);
        if had_errors {
            return Err(FormatError::malformed(
                String::from_utf8_lossy(bytes),
                "content is not valid in the selected encoding",
            ));
        }
        Ok(text.into_owned())
    }

    /// Encode text, failing if a character has no representation.
    pub fn encode(self, text: &str) -> Result<Cow<'_, [u8]>> {
        let (bytes, _, had_errors) = self.0.encode(text);
        if had_errors {
            return Err(FormatError::malformed(
                text,
                "content is not representable in the selected encoding",
            ));
        }
        Ok(bytes)
    }
}

/// Options shared by every binary encode and decode call.
///
/// # Examples
///
/// ```
/// use robtop_bytes::{ByteOrder, Options};
///
/// let options = Options::default().with_order(ByteOrder::Big);
/// assert_eq!(options.order, ByteOrder::Big);
/// assert_eq!(options.encoding.name(), "UTF-8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Byte order for multi-byte fields.
    pub order: ByteOrder,
    /// Encoding for text content.
    pub encoding: TextEncoding,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Select the text encoding by label.
    pub fn with_encoding_label(self, label: &str) -> Result<Self> {
        Ok(self.with_encoding(TextEncoding::for_label(label)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unencodable_text() {
        let latin = TextEncoding::for_label("latin1").unwrap();
        assert!(latin.encode("café").is_ok());
        assert!(matches!(
            latin.encode("日本"),
            Err(FormatError::MalformedText { .. })
        ));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let utf8 = TextEncoding::default();
        assert!(utf8.decode(&[0xFF, 0xFE, 0x41]).is_err());
        assert_eq!(utf8.decode(b"ok").unwrap(), "ok");
    }

    #[test]
    fn builder_sets_encoding() {
        let options = Options::new().with_encoding_label("windows-1252").unwrap();
        assert_eq!(options.encoding.name(), "windows-1252");
        assert!(Options::new().with_encoding_label("nope").is_err());
    }
}
