//! Input recordings.
//!
//! An item is written as `[1;]timestamp;[1];[;]`: an optional marker for
//! the previous state, the timestamp, an optional marker for the next
//! state, and an optional trailing separator flagging the secondary
//! player. A recording is its items written back to back.

use robtop_bytes::{FormatError, Result};

use crate::{RobTop, RobTopConfig};

static DEFAULT_CONFIG: RobTopConfig = RobTopConfig::DEFAULT;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecordingItem {
    /// Seconds since the start of the attempt.
    pub timestamp: f64,
    pub previous: bool,
    pub next: bool,
    pub secondary: bool,
}

impl RecordingItem {
    pub fn new(timestamp: f64) -> Self {
        Self {
            timestamp,
            ..Self::default()
        }
    }

    fn write(&self, out: &mut String, config: &RobTopConfig) {
        let separator = config.recording_separator;

        if self.previous {
            out.push_str(&config.affirmative);
            out.push(separator);
        }

        out.push_str(&self.timestamp.to_string());
        out.push(separator);

        if self.next {
            out.push_str(&config.affirmative);
        }
        out.push(separator);

        if self.secondary {
            out.push(separator);
        }
    }
}

impl RobTop for RecordingItem {
    fn from_robtop_with(text: &str, config: &RobTopConfig) -> Result<Self> {
        match Scanner::new(text, config).item_at(0, true) {
            Some((item, _)) => Ok(item),
            None => {
                tracing::debug!(text, "recording item does not match its grammar");
                Err(FormatError::malformed(text, "not a recording item"))
            }
        }
    }

    fn to_robtop_with(&self, config: &RobTopConfig) -> String {
        let mut out = String::new();
        self.write(&mut out, config);
        out
    }
}

/// Matches recording items at arbitrary positions of a text.
struct Scanner<'a> {
    text: &'a str,
    config: &'a RobTopConfig,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, config: &'a RobTopConfig) -> Self {
        Self { text, config }
    }

    fn separator(&self, at: usize) -> Option<usize> {
        self.text[at..]
            .starts_with(self.config.recording_separator)
            .then(|| at + self.config.recording_separator.len_utf8())
    }

    /// The affirmative marker followed by a separator.
    fn marker(&self, at: usize) -> Option<usize> {
        let affirmative: &str = &self.config.affirmative;
        if affirmative.is_empty() || !self.text[at..].starts_with(affirmative) {
            return None;
        }
        self.separator(at + affirmative.len())
    }

    fn digits(&self, at: usize) -> usize {
        at + self.text[at..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count()
    }

    /// `digits [. digits*]` followed by a separator.
    fn timestamp(&self, at: usize) -> Option<(f64, usize)> {
        let mut end = self.digits(at);
        if end == at {
            return None;
        }
        if self.text[end..].starts_with('.') {
            end = self.digits(end + 1);
        }

        let timestamp = self.text[at..end].parse().ok()?;
        Some((timestamp, self.separator(end)?))
    }

    /// Match one item starting at `at`.
    ///
    /// Optional parts are tried present first. With `whole`, only a match
    /// reaching the end of the text is accepted.
    fn item_at(&self, at: usize, whole: bool) -> Option<(RecordingItem, usize)> {
        for previous in [true, false] {
            let start = if previous { self.marker(at) } else { Some(at) };
            let Some(start) = start else {
                continue;
            };
            let Some((timestamp, after_timestamp)) = self.timestamp(start) else {
                continue;
            };
            let (next, end) = match self.marker(after_timestamp) {
                Some(end) => (true, end),
                None => match self.separator(after_timestamp) {
                    Some(end) => (false, end),
                    None => continue,
                },
            };

            for secondary in [true, false] {
                let end = if secondary { self.separator(end) } else { Some(end) };
                let Some(end) = end else {
                    continue;
                };
                if whole && end != self.text.len() {
                    continue;
                }

                let item = RecordingItem {
                    timestamp,
                    previous,
                    next,
                    secondary,
                };
                return Some((item, end));
            }
        }
        None
    }
}

/// Lazily scans a text for recording items, skipping anything that does
/// not match.
pub struct RecordingIter<'a> {
    scanner: Scanner<'a>,
    position: usize,
}

impl Iterator for RecordingIter<'_> {
    type Item = RecordingItem;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.scanner.text;
        while self.position < text.len() {
            if let Some((item, end)) = self.scanner.item_at(self.position, false) {
                self.position = end;
                return Some(item);
            }
            let skipped = text[self.position..].chars().next().map_or(1, char::len_utf8);
            self.position += skipped;
        }
        None
    }
}

/// A chronological sequence of recording items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recording(Vec<RecordingItem>);

impl Recording {
    pub fn new(items: Vec<RecordingItem>) -> Self {
        Self(items)
    }

    pub fn iter_robtop(text: &str) -> impl Iterator<Item = RecordingItem> + '_ {
        Self::iter_robtop_with(text, &DEFAULT_CONFIG)
    }

    pub fn iter_robtop_with<'a>(text: &'a str, config: &'a RobTopConfig) -> RecordingIter<'a> {
        RecordingIter {
            scanner: Scanner::new(text, config),
            position: 0,
        }
    }

    pub fn items(&self) -> &[RecordingItem] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<RecordingItem> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, item: RecordingItem) -> &mut Self {
        self.0.push(item);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecordingItem> {
        self.0.iter()
    }
}

impl FromIterator<RecordingItem> for Recording {
    fn from_iter<I: IntoIterator<Item = RecordingItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Recording {
    type Item = &'a RecordingItem;
    type IntoIter = std::slice::Iter<'a, RecordingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl RobTop for Recording {
    /// Never fails: text between items is skipped.
    fn from_robtop_with(text: &str, config: &RobTopConfig) -> Result<Self> {
        Ok(Self::iter_robtop_with(text, config).collect())
    }

    fn to_robtop_with(&self, config: &RobTopConfig) -> String {
        let mut out = String::new();
        for item in &self.0 {
            item.write(&mut out, config);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_marker_item() {
        let item = RecordingItem::from_robtop("1;1.5;;").unwrap();
        assert_eq!(
            item,
            RecordingItem {
                timestamp: 1.5,
                previous: true,
                next: false,
                secondary: false,
            }
        );
        assert_eq!(item.to_robtop(), "1;1.5;;");
    }

    #[test]
    fn marker_falls_back_to_timestamp() {
        // "1" followed by a separator could be the previous marker, but then
        // nothing else would match
        let item = RecordingItem::from_robtop("1;1;").unwrap();
        assert_eq!(item.timestamp, 1.0);
        assert!(!item.previous);
        assert!(item.next);
    }

    #[test]
    fn secondary_and_next() {
        let item = RecordingItem {
            timestamp: 12.0,
            next: true,
            secondary: true,
            ..RecordingItem::default()
        };
        assert_eq!(item.to_robtop(), "12;1;;");
        assert_eq!(RecordingItem::from_robtop("12;1;;").unwrap(), item);
    }

    #[test]
    fn rejects_malformed_items() {
        for text in ["", "1.5", ";1.5;;", "1.5;;x", "a;;"] {
            assert!(
                matches!(
                    RecordingItem::from_robtop(text),
                    Err(FormatError::MalformedText { .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn recording_skips_garbage() {
        let recording = Recording::from_robtop("xx0.5;;yy1;2;1;").unwrap();
        assert_eq!(recording.len(), 2);
        assert_eq!(recording.items()[0], RecordingItem::new(0.5));
        assert!(recording.items()[1].previous && recording.items()[1].next);
        assert_eq!(recording.to_robtop(), "0.5;;1;2;1;");
    }

    #[test]
    fn lazy_iteration() {
        let mut items = Recording::iter_robtop("0;;1;;2;;");
        assert_eq!(items.next().map(|item| item.timestamp), Some(0.0));
        assert_eq!(items.count(), 2);
    }

    #[test]
    fn default_iteration_matches_explicit_config() {
        let text = "1;0.5;1;2;;";
        let implicit: Vec<_> = Recording::iter_robtop(text).collect();
        let explicit: Vec<_> = Recording::iter_robtop_with(text, &RobTopConfig::DEFAULT).collect();
        assert_eq!(implicit, explicit);
        assert!(implicit[0].previous && implicit[0].next);
    }

    #[test]
    fn custom_markers() {
        let config = RobTopConfig::default()
            .with_recording_separator('|')
            .with_affirmative("y");
        let item = RecordingItem {
            timestamp: 3.25,
            previous: true,
            ..RecordingItem::default()
        };
        let text = item.to_robtop_with(&config);
        assert_eq!(text, "y|3.25||");
        assert_eq!(RecordingItem::from_robtop_with(&text, &config).unwrap(), item);
    }
}
