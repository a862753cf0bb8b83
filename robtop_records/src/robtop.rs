use std::borrow::Cow;

use robtop_bytes::Result;

/// Constants of the RobTop text format.
///
/// The defaults are the values the game itself writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobTopConfig {
    /// Separates the entries of a progress list.
    pub progress_separator: char,
    /// Separates the tokens of a recording item.
    pub recording_separator: char,
    /// Marker written for a set boolean.
    pub affirmative: Cow<'static, str>,
}

impl Default for RobTopConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RobTopConfig {
    /// The game's own separators and marker.
    pub const DEFAULT: Self = Self {
        progress_separator: ',',
        recording_separator: ';',
        affirmative: Cow::Borrowed("1"),
    };

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_progress_separator(mut self, separator: char) -> Self {
        self.progress_separator = separator;
        self
    }

    #[must_use]
    pub fn with_recording_separator(mut self, separator: char) -> Self {
        self.recording_separator = separator;
        self
    }

    #[must_use]
    pub fn with_affirmative(mut self, affirmative: impl Into<Cow<'static, str>>) -> Self {
        self.affirmative = affirmative.into();
        self
    }
}

/// A record with a RobTop text form.
pub trait RobTop: Sized {
    fn from_robtop_with(text: &str, config: &RobTopConfig) -> Result<Self>;

    fn to_robtop_with(&self, config: &RobTopConfig) -> String;

    fn from_robtop(text: &str) -> Result<Self> {
        Self::from_robtop_with(text, &RobTopConfig::default())
    }

    fn to_robtop(&self) -> String {
        self.to_robtop_with(&RobTopConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_const() {
        let config = RobTopConfig::default();
        assert_eq!(config, RobTopConfig::DEFAULT);
        assert!(matches!(config.affirmative, Cow::Borrowed("1")));
    }

    #[test]
    fn affirmative_accepts_owned_and_static() {
        let owned = RobTopConfig::new().with_affirmative(String::from("yes"));
        let borrowed = RobTopConfig::new().with_affirmative("yes");
        assert_eq!(owned, borrowed);
        assert_eq!(RobTopConfig::DEFAULT.progress_separator, ',');
    }
}
