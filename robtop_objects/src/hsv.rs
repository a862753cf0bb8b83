use robtop_bits::flag_byte;
use robtop_bytes::{Binary, Options, Reader, Result, Writer};

flag_byte! {
    /// Which HSV components are applied additively rather than scaled.
    pub struct HsvFlags {
        const SATURATION_CHECKED = 1 << 0;
        const BRIGHTNESS_CHECKED = 1 << 1;
    }
}

/// Hue/saturation/brightness adjustment of a color slot.
///
/// Wire layout: hue `i16`, saturation `f32`, brightness `f32`, then a
/// flag byte ([`HsvFlags`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue shift in degrees.
    pub hue: i16,
    pub saturation: f32,
    pub brightness: f32,
    pub saturation_checked: bool,
    pub brightness_checked: bool,
}

impl Default for Hsv {
    fn default() -> Self {
        Self {
            hue: 0,
            saturation: 1.0,
            brightness: 1.0,
            saturation_checked: false,
            brightness_checked: false,
        }
    }
}

impl Hsv {
    pub fn new(hue: i16, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            ..Self::default()
        }
    }

    fn flags(&self) -> HsvFlags {
        let mut flags = HsvFlags::empty();
        flags.set(HsvFlags::SATURATION_CHECKED, self.saturation_checked);
        flags.set(HsvFlags::BRIGHTNESS_CHECKED, self.brightness_checked);
        flags
    }
}

impl Binary for Hsv {
    fn from_binary(reader: &mut Reader<'_>, options: &Options) -> Result<Self> {
        let hue = reader.read_i16(options.order)?;
        let saturation = reader.read_f32(options.order)?;
        let brightness = reader.read_f32(options.order)?;
        let flags = HsvFlags::from_binary(reader, options)?;

        Ok(Self {
            hue,
            saturation,
            brightness,
            saturation_checked: flags.contains(HsvFlags::SATURATION_CHECKED),
            brightness_checked: flags.contains(HsvFlags::BRIGHTNESS_CHECKED),
        })
    }

    fn to_binary(&self, writer: &mut Writer, options: &Options) -> Result<()> {
        writer
            .write_i16(self.hue, options.order)
            .write_f32(self.saturation, options.order)
            .write_f32(self.brightness, options.order);
        self.flags().to_binary(writer, options)
    }
}
