//! Version numbers.
//!
//! A version is stored as a single decimal value, `major * 10 + minor`, so
//! the minor part is limited to one digit.

use std::fmt;

use robtop_bytes::{Binary, FormatError, Options, Reader, Result, Writer};
use serde::{Deserialize, Serialize};

use crate::{RobTop, RobTopConfig};

const BASE: u32 = 10;

/// Game version this crate targets.
pub const CURRENT_GAME_VERSION: GameVersion = GameVersion(Version::new_unchecked(2, 1));

/// Binary format version this crate targets.
pub const CURRENT_BINARY_VERSION: Version = Version::new_unchecked(3, 5);

/// Serialized as `{"major": .., "minor": ..}`. Deserializing goes through
/// [`Version::new`], so out of range minors are rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "VersionData")]
pub struct Version {
    major: u32,
    minor: u8,
}

#[derive(Deserialize)]
struct VersionData {
    major: u32,
    minor: u8,
}

impl TryFrom<VersionData> for Version {
    type Error = FormatError;

    fn try_from(data: VersionData) -> Result<Self> {
        Self::new(data.major, data.minor)
    }
}

impl Version {
    /// Create a version, rejecting minors of ten or more.
    pub fn new(major: u32, minor: u8) -> Result<Self> {
        if u32::from(minor) >= BASE {
            return Err(FormatError::invalid_version(format!(
                "expected minor < {BASE}, got {minor}"
            )));
        }
        Ok(Self::new_unchecked(major, minor))
    }

    const fn new_unchecked(major: u32, minor: u8) -> Self {
        Self { major, minor }
    }

    pub const fn major(self) -> u32 {
        self.major
    }

    pub const fn minor(self) -> u8 {
        self.minor
    }

    pub const fn from_value(value: u32) -> Self {
        Self::new_unchecked(value / BASE, (value % BASE) as u8)
    }

    /// `major * 10 + minor`, saturating for majors beyond the `u32` range.
    pub const fn to_value(self) -> u32 {
        self.major.saturating_mul(BASE).saturating_add(self.minor as u32)
    }

    /// Whether `text` looks like a version value (ASCII digits only).
    pub fn can_be_in(text: &str) -> bool {
        !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

fn parse_value(text: &str) -> Result<u32> {
    if !Version::can_be_in(text) {
        tracing::debug!(text, "version is not a decimal value");
        return Err(FormatError::malformed(text, "expected decimal digits"));
    }
    text.parse().map_err(|_| {
        tracing::debug!(text, "version value out of range");
        FormatError::malformed(text, "version value out of range")
    })
}

impl RobTop for Version {
    fn from_robtop_with(text: &str, _config: &RobTopConfig) -> Result<Self> {
        parse_value(text).map(Self::from_value)
    }

    fn to_robtop_with(&self, _config: &RobTopConfig) -> String {
        self.to_value().to_string()
    }
}

/// One byte holding [`Version::to_value`]. Larger values are truncated.
impl Binary for Version {
    fn from_binary(reader: &mut Reader<'_>, _options: &Options) -> Result<Self> {
        Ok(Self::from_value(reader.read_u8()?.into()))
    }

    fn to_binary(&self, writer: &mut Writer, _options: &Options) -> Result<()> {
        let value = self.to_value();
        if value > u8::MAX.into() {
            tracing::warn!(version = %self, value, "version does not fit in one byte, truncating");
        }
        writer.write_u8(value as u8);
        Ok(())
    }
}

/// A game version, whose text form uses the game's historical numbering:
///
/// | value    | version          |
/// |----------|------------------|
/// | 0        | 0.0              |
/// | 1 to 7   | 1.0 to 1.6       |
/// | 8, 9     | invalid          |
/// | 10       | 1.7              |
/// | 11       | 1.8              |
/// | 12 on    | `value / 10`.`value % 10` |
///
/// The binary and JSON forms are the plain [`Version`] ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GameVersion(pub Version);

impl GameVersion {
    pub fn new(major: u32, minor: u8) -> Result<Self> {
        Version::new(major, minor).map(Self)
    }

    pub const fn version(self) -> Version {
        self.0
    }

    pub fn from_robtop_value(value: u32) -> Result<Self> {
        let version = match value {
            0 => Version::default(),
            1..=7 => Version::new_unchecked(1, (value - 1) as u8),
            8 | 9 => {
                return Err(FormatError::invalid_version(format!(
                    "invalid game version `{value}`"
                )));
            }
            10 => Version::new_unchecked(1, 7),
            11 => Version::new_unchecked(1, 8),
            _ => Version::from_value(value),
        };
        Ok(Self(version))
    }

    pub fn to_robtop_value(self) -> u32 {
        match (self.0.major, self.0.minor) {
            (1, minor @ 0..=6) => u32::from(minor) + 1,
            (1, 7) => 10,
            (1, 8) => 11,
            _ => self.0.to_value(),
        }
    }

    pub fn can_be_in(text: &str) -> bool {
        Version::can_be_in(text)
    }
}

impl From<Version> for GameVersion {
    fn from(version: Version) -> Self {
        Self(version)
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl RobTop for GameVersion {
    fn from_robtop_with(text: &str, _config: &RobTopConfig) -> Result<Self> {
        let value = parse_value(text)?;
        Self::from_robtop_value(value).inspect_err(|error| {
            tracing::debug!(text, %error, "rejected game version");
        })
    }

    fn to_robtop_with(&self, _config: &RobTopConfig) -> String {
        self.to_robtop_value().to_string()
    }
}

impl Binary for GameVersion {
    fn from_binary(reader: &mut Reader<'_>, options: &Options) -> Result<Self> {
        Version::from_binary(reader, options).map(Self)
    }

    fn to_binary(&self, writer: &mut Writer, options: &Options) -> Result<()> {
        self.0.to_binary(writer, options)
    }
}
