use thiserror::Error;

/// Errors raised while decoding RobTop binary or text data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The binary source ran out before a field was fully read.
    #[error("unexpected end of data: needed {needed} bytes at offset {offset}, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A string does not match the expected grammar.
    #[error("malformed text {text:?}: {reason}")]
    MalformedText { text: String, reason: &'static str },

    /// A numeric code has no corresponding enumeration variant.
    #[error("invalid {kind} value {value}")]
    InvalidEnumeration { kind: &'static str, value: u32 },

    #[error("invalid version: {message}")]
    InvalidVersion { message: String },

    /// The requested text encoding label is not recognized.
    #[error("unknown text encoding {label:?}")]
    UnknownEncoding { label: String },

    #[error("{count} unexpected trailing bytes")]
    TrailingBytes { count: usize },

    /// Encoded text does not fit its `u16` length prefix.
    #[error("text of {len} bytes exceeds the {max} byte limit")]
    TextTooLong { len: usize, max: usize },

    /// A record's id would be read back as a different kind.
    #[error("id {id} of a {kind} record is read back as {inferred}")]
    KindMismatch {
        id: u16,
        kind: String,
        inferred: String,
    },
}

/// Result type alias for RobTop codec operations.
pub type Result<T> = core::result::Result<T, FormatError>;

impl FormatError {
    /// Create a MalformedText error.
    pub fn malformed(text: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedText {
            text: text.into(),
            reason,
        }
    }

    /// Create an InvalidEnumeration error.
    pub fn invalid_enumeration(kind: &'static str, value: impl Into<u32>) -> Self {
        Self::InvalidEnumeration {
            kind,
            value: value.into(),
        }
    }

    /// Create an InvalidVersion error.
    pub fn invalid_version(message: impl Into<String>) -> Self {
        Self::InvalidVersion {
            message: message.into(),
        }
    }

    /// Create an UnknownEncoding error.
    pub fn unknown_encoding(label: impl Into<String>) -> Self {
        Self::UnknownEncoding {
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FormatError::Truncated {
            offset: 4,
            needed: 2,
            remaining: 1,
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of data: needed 2 bytes at offset 4, 1 remaining"
        );

        let err = FormatError::invalid_enumeration("ZLayer", 9u8);
        assert_eq!(err.to_string(), "invalid ZLayer value 9");

        let err = FormatError::malformed("1;x", "expected timestamp");
        assert_eq!(err.to_string(), "malformed text \"1;x\": expected timestamp");
    }
}
