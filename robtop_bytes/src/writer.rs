use byteorder::{BigEndian, ByteOrder as Endianness, LittleEndian};

use crate::{ByteOrder, FormatError, Result, TextEncoding};

/// Append-only byte sink.
///
/// Writes into memory never fail; the only fallible operation is
/// [`Writer::write_string`], which transcodes text first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Writer {
    data: Vec<u8>,
}

macro_rules! write_numeric {
    ($($(#[$meta:meta])* $name:ident($ty:ty), $width:expr, $write:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self, value: $ty, order: ByteOrder) -> &mut Self {
                let mut bytes = [0u8; $width];
                match order {
                    ByteOrder::Little => LittleEndian::$write(&mut bytes, value),
                    ByteOrder::Big => BigEndian::$write(&mut bytes, value),
                }
                self.write_bytes(&bytes)
            }
        )*
    };
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Append raw bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.data.extend_from_slice(bytes);
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.data.push(value);
        self
    }

    pub fn write_i8(&mut self, value: i8) -> &mut Self {
        self.write_u8(value as u8)
    }

    /// Write a boolean as a single `0` or `1` byte.
    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(u8::from(value))
    }

    write_numeric! {
        write_u16(u16), 2, write_u16;
        write_i16(i16), 2, write_i16;
        write_u32(u32), 4, write_u32;
        write_i32(i32), 4, write_i32;
        /// Write an IEEE-754 single precision float.
        write_f32(f32), 4, write_f32;
    }

    /// Write text as a `u16` length prefix followed by its encoded bytes.
    ///
    /// Text longer than `u16::MAX` bytes once encoded is rejected with
    /// [`FormatError::TextTooLong`] and nothing is written.
    pub fn write_string(
        &mut self,
        text: &str,
        order: ByteOrder,
        encoding: TextEncoding,
    ) -> Result<&mut Self> {
        let bytes = encoding.encode(text)?;
        let Ok(len) = u16::try_from(bytes.len()) else {
            tracing::debug!(len = bytes.len(), "text does not fit a u16 length prefix");
            return Err(FormatError::TextTooLong {
                len: bytes.len(),
                max: u16::MAX.into(),
            });
        };
        self.write_u16(len, order);
        Ok(self.write_bytes(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reader;

    #[test]
    fn writes_both_orders() {
        let mut writer = Writer::new();
        writer
            .write_u16(0x1234, ByteOrder::Little)
            .write_u16(0x1234, ByteOrder::Big);
        assert_eq!(writer.as_slice(), &[0x34, 0x12, 0x12, 0x34]);
    }

    #[test]
    fn bool_is_one_byte() {
        let mut writer = Writer::new();
        writer.write_bool(true).write_bool(false);
        assert_eq!(writer.into_bytes(), vec![1, 0]);
    }

    #[test]
    fn string_roundtrip() -> Result<()> {
        let mut writer = Writer::new();
        writer.write_string("héllo", ByteOrder::Big, TextEncoding::default())?;
        let bytes = writer.into_bytes();
        assert_eq!(&bytes[..2], &[0, 6]);

        let mut reader = Reader::new(&bytes);
        assert_eq!(
            reader.read_string(ByteOrder::Big, TextEncoding::default())?,
            "héllo"
        );
        Ok(())
    }

    #[test]
    fn oversized_string_is_rejected() {
        let mut writer = Writer::new();
        let text = "é".repeat(40_000);
        let err = writer
            .write_string(&text, ByteOrder::Little, TextEncoding::default())
            .unwrap_err();
        assert_eq!(
            err,
            FormatError::TextTooLong {
                len: 80_000,
                max: 65_535
            }
        );
        assert!(writer.is_empty());

        // exactly at the limit still fits
        let text = "a".repeat(usize::from(u16::MAX));
        writer
            .write_string(&text, ByteOrder::Little, TextEncoding::default())
            .unwrap();
        assert_eq!(writer.len(), 2 + usize::from(u16::MAX));
    }
}
