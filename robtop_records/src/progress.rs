use robtop_bytes::{Binary, FormatError, Options, Reader, Result, Writer};

use crate::{RobTop, RobTopConfig};

/// Per-checkpoint percentages, in level order.
///
/// Text form: `10,50,100`. Binary form: a `u8` count followed by that
/// many `i8` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Progress(Vec<i8>);

impl Progress {
    pub fn new(values: Vec<i8>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[i8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<i8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, value: i8) -> &mut Self {
        self.0.push(value);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i8> {
        self.0.iter()
    }

    /// Whether `text` looks like a progress list.
    ///
    /// Single-entry lists carry no separator and are not recognized.
    pub fn can_be_in(text: &str) -> bool {
        Self::can_be_in_with(text, &RobTopConfig::default())
    }

    pub fn can_be_in_with(text: &str, config: &RobTopConfig) -> bool {
        text.contains(config.progress_separator)
    }
}

impl From<Vec<i8>> for Progress {
    fn from(values: Vec<i8>) -> Self {
        Self(values)
    }
}

impl FromIterator<i8> for Progress {
    fn from_iter<I: IntoIterator<Item = i8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Progress {
    type Item = &'a i8;
    type IntoIter = std::slice::Iter<'a, i8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl RobTop for Progress {
    fn from_robtop_with(text: &str, config: &RobTopConfig) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::default());
        }

        text.split(config.progress_separator)
            .map(|part| {
                part.parse::<i8>().map_err(|_| {
                    tracing::debug!(text, part, "progress entry is not an i8");
                    FormatError::malformed(text, "progress entry is not an 8-bit integer")
                })
            })
            .collect()
    }

    fn to_robtop_with(&self, config: &RobTopConfig) -> String {
        let separator = config.progress_separator.to_string();

        self.0
            .iter()
            .map(i8::to_string)
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

impl Binary for Progress {
    fn from_binary(reader: &mut Reader<'_>, _options: &Options) -> Result<Self> {
        let count = reader.read_u8()?;
        (0..count).map(|_| reader.read_i8()).collect()
    }

    fn to_binary(&self, writer: &mut Writer, _options: &Options) -> Result<()> {
        let count = u8::try_from(self.0.len()).unwrap_or(u8::MAX);
        if usize::from(count) < self.0.len() {
            tracing::debug!(len = self.0.len(), "progress list cut to u8 count");
        }

        writer.write_u8(count);
        for &value in self.0.iter().take(count.into()) {
            writer.write_i8(value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_form() {
        let progress = Progress::from_robtop("0,25,-3,100").unwrap();
        assert_eq!(progress.as_slice(), &[0, 25, -3, 100]);
        assert_eq!(progress.to_robtop(), "0,25,-3,100");
        assert!(Progress::can_be_in("0,25"));
        assert!(!Progress::can_be_in("25"));
    }

    #[test]
    fn empty_text_is_empty_list() {
        assert!(Progress::from_robtop("").unwrap().is_empty());
        assert_eq!(Progress::default().to_robtop(), "");
    }

    #[test]
    fn bad_entries() {
        for text in ["1,,2", "1,200", "a,b", "1,"] {
            assert!(
                matches!(Progress::from_robtop(text), Err(FormatError::MalformedText { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn custom_separator() {
        let config = RobTopConfig::default().with_progress_separator('|');
        let progress = Progress::new(vec![1, 2]);
        assert_eq!(progress.to_robtop_with(&config), "1|2");
        assert_eq!(Progress::from_robtop_with("1|2", &config).unwrap(), progress);
    }

    #[test]
    fn binary_form() {
        let progress = Progress::new(vec![10, -1]);
        assert_eq!(progress.to_bytes().unwrap(), [2, 10, 0xFF]);
        assert_eq!(Progress::from_bytes(&[2, 10, 0xFF]).unwrap(), progress);
        assert!(Progress::from_bytes(&[3, 1]).is_err());
    }
}
