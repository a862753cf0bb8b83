//! Lazy decoding of object streams.

use robtop_bytes::{Options, Reader, Result};
use robtop_objects::AnyObject;

/// Decodes objects back to back until the input is exhausted, inferring
/// each kind from its id.
///
/// The first error ends the iteration.
///
/// # Examples
///
/// ```
/// use robtop_codec::prelude::*;
///
/// let bytes = encode_objects(&[AnyObject::new(ObjectKind::Coin)], &Options::default())?;
/// let kinds: Vec<_> = ObjectIter::new(&bytes, Options::default())
///     .map(|object| object.map(|object| object.kind()))
///     .collect::<Result<_>>()?;
/// assert_eq!(kinds, [ObjectKind::Coin]);
/// # Ok::<(), FormatError>(())
/// ```
pub struct ObjectIter<'a> {
    reader: Reader<'a>,
    options: Options,
    failed: bool,
}

impl<'a> ObjectIter<'a> {
    pub fn new(bytes: &'a [u8], options: Options) -> Self {
        Self {
            reader: Reader::new(bytes),
            options,
            failed: false,
        }
    }

    /// Byte offset of the next object.
    pub fn position(&self) -> usize {
        self.reader.position()
    }
}

impl Iterator for ObjectIter<'_> {
    type Item = Result<AnyObject>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_empty() {
            return None;
        }

        let object = AnyObject::decode_inferred(&mut self.reader, &self.options);
        self.failed = object.is_err();
        Some(object)
    }
}
