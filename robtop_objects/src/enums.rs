//! Enumerations stored as one-byte codes.

use robtop_bytes::{Binary, FormatError, Options, Reader, Result, Writer};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(u8)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Wire code of this variant.
            pub const fn value(self) -> u8 {
                self as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = FormatError;

            fn try_from(value: u8) -> Result<Self> {
                match value {
                    $($value => Ok(Self::$variant),)*
                    _ => Err(FormatError::invalid_enumeration(stringify!($name), value)),
                }
            }
        }

        impl Binary for $name {
            fn from_binary(reader: &mut Reader<'_>, _options: &Options) -> Result<Self> {
                Self::try_from(reader.read_u8()?)
            }

            fn to_binary(&self, writer: &mut Writer, _options: &Options) -> Result<()> {
                writer.write_u8(self.value());
                Ok(())
            }
        }
    };
}

wire_enum! {
    /// Coarse draw layer. Stored in the top three bits of the z word.
    pub enum ZLayer {
        #[default]
        Default = 0,
        B4 = 1,
        B3 = 2,
        B2 = 3,
        B1 = 4,
        T1 = 5,
        T2 = 6,
        T3 = 7,
    }
}

wire_enum! {
    pub enum Easing {
        #[default]
        None = 0,
        EaseInOut = 1,
        EaseIn = 2,
        EaseOut = 3,
        ElasticInOut = 4,
        ElasticIn = 5,
        ElasticOut = 6,
        BounceInOut = 7,
        BounceIn = 8,
        BounceOut = 9,
        ExponentialInOut = 10,
        ExponentialIn = 11,
        ExponentialOut = 12,
        SineInOut = 13,
        SineIn = 14,
        SineOut = 15,
        BackInOut = 16,
        BackIn = 17,
        BackOut = 18,
    }
}

wire_enum! {
    /// Player color a color channel copies, if any.
    pub enum PlayerColor {
        #[default]
        NotPlayer = 0,
        Player1 = 1,
        Player2 = 2,
    }
}

wire_enum! {
    pub enum PulseTargetType {
        #[default]
        ColorChannel = 0,
        Group = 1,
    }
}

wire_enum! {
    pub enum PulseType {
        #[default]
        Color = 0,
        Hsv = 1,
    }
}

wire_enum! {
    pub enum PulseMode {
        #[default]
        Both = 0,
        MainOnly = 1,
        DetailOnly = 2,
    }
}

wire_enum! {
    /// Axis a move trigger follows its target on.
    pub enum TargetType {
        #[default]
        None = 0,
        XOnly = 1,
        YOnly = 2,
    }
}

wire_enum! {
    pub enum ToggleType {
        #[default]
        Default = 0,
        On = 1,
        Off = 2,
    }
}

wire_enum! {
    pub enum InstantCountComparison {
        #[default]
        Equals = 0,
        Larger = 1,
        Smaller = 2,
    }
}

wire_enum! {
    pub enum PickupItemMode {
        #[default]
        Default = 0,
        Pickup = 1,
        Toggle = 2,
    }
}
