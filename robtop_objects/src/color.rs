use std::fmt;

use bytemuck_derive::{Pod, Zeroable};
use robtop_bytes::{Binary, Options, Reader, Result, Writer};

/// An RGB color, three bytes on the wire.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    /// White.
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value; higher bits are ignored.
    pub const fn from_value(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub const fn to_value(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_value())
    }
}

impl Binary for Color {
    fn from_binary(reader: &mut Reader<'_>, _options: &Options) -> Result<Self> {
        let rgb: [u8; 3] = reader.read_array()?;
        Ok(bytemuck::cast(rgb))
    }

    fn to_binary(&self, writer: &mut Writer, _options: &Options) -> Result<()> {
        writer.write_bytes(bytemuck::bytes_of(self));
        Ok(())
    }
}
