//! The binary codec trait.

use crate::{FormatError, Options, Reader, Result, Writer};

/// A value with a fixed RobTop binary layout.
///
/// Implementors describe how to read themselves from a [`Reader`] and
/// write themselves to a [`Writer`]; the provided methods wrap those for
/// whole buffers using [`Options::default`].
pub trait Binary: Sized {
    fn from_binary(reader: &mut Reader<'_>, options: &Options) -> Result<Self>;

    fn to_binary(&self, writer: &mut Writer, options: &Options) -> Result<()>;

    /// Decode a value that must span the whole buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with(bytes, &Options::default())
    }

    fn from_bytes_with(bytes: &[u8], options: &Options) -> Result<Self> {
        let mut reader = Reader::new(bytes);
        let value = Self::from_binary(&mut reader, options)?;
        match reader.remaining() {
            0 => Ok(value),
            count => Err(FormatError::TrailingBytes { count }),
        }
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_bytes_with(&Options::default())
    }

    fn to_bytes_with(&self, options: &Options) -> Result<Vec<u8>> {
        let mut writer = Writer::new();
        self.to_binary(&mut writer, options)?;
        Ok(writer.into_bytes())
    }
}

macro_rules! binary_primitive {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            impl Binary for $ty {
                fn from_binary(reader: &mut Reader<'_>, options: &Options) -> Result<Self> {
                    reader.$read(options.order)
                }

                fn to_binary(&self, writer: &mut Writer, options: &Options) -> Result<()> {
                    writer.$write(*self, options.order);
                    Ok(())
                }
            }
        )*
    };
}

binary_primitive! {
    u16 => read_u16, write_u16;
    i16 => read_i16, write_i16;
    u32 => read_u32, write_u32;
    i32 => read_i32, write_i32;
    f32 => read_f32, write_f32;
}

impl Binary for u8 {
    fn from_binary(reader: &mut Reader<'_>, _options: &Options) -> Result<Self> {
        reader.read_u8()
    }

    fn to_binary(&self, writer: &mut Writer, _options: &Options) -> Result<()> {
        writer.write_u8(*self);
        Ok(())
    }
}

impl Binary for i8 {
    fn from_binary(reader: &mut Reader<'_>, _options: &Options) -> Result<Self> {
        reader.read_i8()
    }

    fn to_binary(&self, writer: &mut Writer, _options: &Options) -> Result<()> {
        writer.write_i8(*self);
        Ok(())
    }
}

impl Binary for bool {
    fn from_binary(reader: &mut Reader<'_>, _options: &Options) -> Result<Self> {
        reader.read_bool()
    }

    fn to_binary(&self, writer: &mut Writer, _options: &Options) -> Result<()> {
        writer.write_bool(*self);
        Ok(())
    }
}
