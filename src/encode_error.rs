use thiserror::Error;

/// The failures that can occur while assembling a multipart body.
///
/// All of these are terminal for the current encode call. No partial
/// body is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// No part writer claimed the value given for this key.
    ///
    /// This is also returned for empty collections, as neither the
    /// collection writers nor the singular writers apply to them.
    #[error("no part writer applies to key \"{key}\" (value kind: {kind})")]
    UnsupportedValue {
        /// The key of the offending `(key, value)` pair.
        key: String,
        /// A short description of the value's shape.
        kind: &'static str,
    },

    /// A write was attempted on an [`Output`](crate::Output) after it was closed.
    #[error("write attempted on a closed output")]
    ClosedSink,

    /// A write would push the output past the maximum buffer size.
    #[error("requested output capacity exceeds the maximum buffer size")]
    Overflow,

    /// The charset could not represent the string being written.
    #[error("string cannot be encoded as {charset}")]
    Encoding {
        /// Canonical name of the output's charset.
        charset: &'static str,
    },
}

impl EncodeError {
    pub(crate) fn unsupported(key: &str, kind: &'static str) -> Self {
        Self::UnsupportedValue {
            key: key.to_owned(),
            kind,
        }
    }
}
