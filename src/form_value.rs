use bytes::Bytes;
use std::fmt::Display;

use crate::EncodedForm;
use crate::FilePart;
use crate::ScalarValue;

///
/// The shapes of value the encoder knows how to write.
///
/// Most variants can be built through `From` conversions:
///
/// ```rust
/// use multipart_form_body::FormValue;
/// use multipart_form_body::FilePart;
///
/// let scalar = FormValue::from("foxes");
/// let number = FormValue::from(42);
/// let file = FormValue::from(FilePart::new(b"content".as_slice()).file_name("a.txt"));
/// let files = FormValue::from(vec![
///     FilePart::new(b"one".as_slice()),
///     FilePart::new(b"two".as_slice()),
/// ]);
/// ```
///
/// Collection variants only encode when non-empty; an empty collection
/// matches no writer and the encode call fails.
///
#[derive(Debug, Clone)]
pub enum FormValue {
    /// A number, boolean, or textual value, sent as a `text/plain` part.
    Scalar(ScalarValue),

    /// A single in-memory file.
    File(FilePart),

    /// An opaque byte blob, with an optional out-of-band filename hint.
    RawBytes {
        bytes: Bytes,
        file_name: Option<String>,
    },

    /// A sequence of scalars. Each element becomes its own part,
    /// all sharing the same key.
    ManyScalars(Vec<ScalarValue>),

    /// A sequence of files. Each element becomes its own part,
    /// all sharing the same key.
    ManyFiles(Vec<FilePart>),

    /// A body already assembled by this encoder, appended verbatim.
    PreEncoded(EncodedForm),
}

impl FormValue {
    /// Creates a raw byte blob value with no filename hint.
    pub fn raw_bytes<B>(bytes: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self::RawBytes {
            bytes: bytes.into(),
            file_name: None,
        }
    }

    /// Creates a raw byte blob value carrying a filename hint.
    ///
    /// The hint ends up as the `filename=` of the part's
    /// `Content-Disposition`, and feeds the mime type guess.
    pub fn raw_bytes_with_file_name<B, N>(bytes: B, file_name: N) -> Self
    where
        B: Into<Bytes>,
        N: Display,
    {
        Self::RawBytes {
            bytes: bytes.into(),
            file_name: Some(file_name.to_string()),
        }
    }

    /// A short description of this value's shape, for error messages.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::File(_) => "file",
            Self::RawBytes { .. } => "raw bytes",
            Self::ManyScalars(scalars) if scalars.is_empty() => "empty scalar collection",
            Self::ManyScalars(_) => "scalar collection",
            Self::ManyFiles(files) if files.is_empty() => "empty file collection",
            Self::ManyFiles(_) => "file collection",
            Self::PreEncoded(_) => "pre-encoded form",
        }
    }
}

impl From<ScalarValue> for FormValue {
    fn from(scalar: ScalarValue) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for FormValue {
    fn from(text: &str) -> Self {
        Self::Scalar(text.into())
    }
}

impl From<String> for FormValue {
    fn from(text: String) -> Self {
        Self::Scalar(text.into())
    }
}

impl From<i64> for FormValue {
    fn from(n: i64) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<i32> for FormValue {
    fn from(n: i32) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<u32> for FormValue {
    fn from(n: u32) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<f64> for FormValue {
    fn from(n: f64) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        Self::Scalar(b.into())
    }
}

impl From<FilePart> for FormValue {
    fn from(file: FilePart) -> Self {
        Self::File(file)
    }
}

impl From<Vec<ScalarValue>> for FormValue {
    fn from(scalars: Vec<ScalarValue>) -> Self {
        Self::ManyScalars(scalars)
    }
}

impl From<Vec<FilePart>> for FormValue {
    fn from(files: Vec<FilePart>) -> Self {
        Self::ManyFiles(files)
    }
}

impl From<EncodedForm> for FormValue {
    fn from(form: EncodedForm) -> Self {
        Self::PreEncoded(form)
    }
}

impl<T> FromIterator<T> for FormValue
where
    T: Into<ScalarValue>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::ManyScalars(iter.into_iter().map(Into::into).collect())
    }
}
