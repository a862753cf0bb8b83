use byteorder::{BigEndian, ByteOrder as Endianness, LittleEndian};

use crate::{ByteOrder, FormatError, Result, TextEncoding};

/// Forward-only cursor over a borrowed byte buffer.
///
/// Every read either consumes exactly the bytes of its field or fails with
/// [`FormatError::Truncated`]; nothing is zero-padded and a failed read
/// does not advance the cursor.
///
/// # Examples
///
/// ```
/// use robtop_bytes::{ByteOrder, FormatError, Reader};
///
/// let mut reader = Reader::new(&[0x01, 0x02, 0x03]);
/// assert_eq!(reader.read_u16(ByteOrder::Little)?, 0x0201);
///
/// // one byte left, a u16 does not fit
/// assert!(matches!(
///     reader.read_u16(ByteOrder::Little),
///     Err(FormatError::Truncated { needed: 2, remaining: 1, .. })
/// ));
/// assert_eq!(reader.read_u8()?, 0x03);
/// # Ok::<(), FormatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    position: usize,
}

macro_rules! read_numeric {
    ($($(#[$meta:meta])* $name:ident -> $ty:ty, $width:expr, $read:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self, order: ByteOrder) -> Result<$ty> {
                let bytes = self.read_bytes($width)?;
                Ok(match order {
                    ByteOrder::Little => LittleEndian::$read(bytes),
                    ByteOrder::Big => BigEndian::$read(bytes),
                })
            }
        )*
    };
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Look at the next `len` bytes without consuming them.
    pub fn peek_bytes(&self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(FormatError::Truncated {
                offset: self.position,
                needed: len,
                remaining: self.remaining(),
            });
        }
        Ok(&self.data[self.position..self.position + len])
    }

    /// Read exactly `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(len)?;
        self.position += len;
        Ok(bytes)
    }

    /// Read a fixed-size array of raw bytes.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a one-byte boolean; any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    read_numeric! {
        read_u16 -> u16, 2, read_u16;
        read_i16 -> i16, 2, read_i16;
        read_u32 -> u32, 4, read_u32;
        read_i32 -> i32, 4, read_i32;
        /// Read an IEEE-754 single precision float.
        read_f32 -> f32, 4, read_f32;
    }

    /// Read a `u16` length prefix followed by that many bytes of text.
    pub fn read_string(&mut self, order: ByteOrder, encoding: TextEncoding) -> Result<String> {
        let len = self.read_u16(order)? as usize;
        let bytes = self.read_bytes(len)?;
        encoding.decode(bytes)
    }
}
