use encoding_rs::Encoding;
use encoding_rs::UTF_8;
use tracing::debug;
use tracing::trace;

use crate::EncodeError;
use crate::EncodedForm;
use crate::FormValue;
use crate::Output;
use crate::output::CRLF;
use crate::util::new_random_boundary;
use crate::writers::WriterRegistry;
use crate::writers::predict_byte_count;

///
/// Assembles `(key, value)` pairs into a `multipart/form-data` body.
///
/// Encoding runs in two passes: a length-prediction pass that sums an
/// upper bound per pair, then a write pass into a buffer allocated once
/// at that size. The writer chosen for each pair is looked up once and
/// reused by both passes.
///
/// The encoder holds no state between calls, so a single instance can
/// serve any number of concurrent `encode` calls.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use multipart_form_body::FilePart;
/// use multipart_form_body::FormValue;
/// use multipart_form_body::MultipartEncoder;
///
/// let encoder = MultipartEncoder::new();
/// let form = encoder.encode(&[
///     ("name", FormValue::from("Joe")),
///     ("age", FormValue::from(42)),
///     (
///         "cv",
///         FormValue::from(FilePart::new(b"experience".as_slice()).file_name("cv.txt")),
///     ),
/// ])?;
///
/// // `form.content_type()` goes in the request's Content-Type header,
/// // `form.as_bytes()` is the request body.
/// assert!(form.content_type().starts_with("multipart/form-data; boundary="));
/// #
/// # Ok(())
/// # }
/// ```
///
pub struct MultipartEncoder {
    charset: &'static Encoding,
    registry: WriterRegistry,
}

impl MultipartEncoder {
    /// Creates an encoder writing UTF-8 bodies.
    pub fn new() -> Self {
        Self::with_charset(UTF_8)
    }

    /// Creates an encoder writing bodies under the given charset.
    ///
    /// Scalar parts declare it in their `Content-Type`; file and raw
    /// byte contents are never transcoded.
    pub fn with_charset(charset: &'static Encoding) -> Self {
        Self {
            charset,
            registry: WriterRegistry::new(),
        }
    }

    /// Encodes the pairs, in order, under a freshly generated
    /// random boundary.
    pub fn encode<K>(&self, pairs: &[(K, FormValue)]) -> Result<EncodedForm, EncodeError>
    where
        K: AsRef<str>,
    {
        self.encode_with_boundary(pairs, &new_random_boundary())
    }

    /// Encodes the pairs, in order, under a caller-supplied boundary.
    ///
    /// The boundary must be legal per RFC 2046 §5.1.1, and must not
    /// contain CRLF or double-quote characters.
    pub fn encode_with_boundary<K>(
        &self,
        pairs: &[(K, FormValue)],
        boundary: &str,
    ) -> Result<EncodedForm, EncodeError>
    where
        K: AsRef<str>,
    {
        let mut writers = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            writers.push(self.registry.find(key.as_ref(), value)?);
        }

        let mut predicted = closing_boundary_length(self.charset, boundary);
        for ((key, value), writer) in pairs.iter().zip(&writers) {
            predicted += writer.length(self.charset, boundary, key.as_ref(), value);
        }

        debug!(
            pairs = pairs.len(),
            predicted_capacity = predicted,
            charset = self.charset.name(),
            "encoding multipart body"
        );

        let output = Output::with_capacity(self.charset, predicted);
        for ((key, value), writer) in pairs.iter().zip(&writers) {
            writer.write_parts(&output, boundary, key.as_ref(), value)?;
        }

        output.write_str("--")?;
        output.write_str(boundary)?;
        output.write_str("--")?;
        output.write_str(CRLF)?;

        let bytes = output.bytes();
        trace!(length = bytes.len(), "multipart body encoded");

        Ok(EncodedForm::new(bytes, boundary.to_owned()))
    }
}

impl Default for MultipartEncoder {
    fn default() -> Self {
        Self::new()
    }
}

fn closing_boundary_length(charset: &'static Encoding, boundary: &str) -> usize {
    predict_byte_count(
        charset,
        "--".len() * 2 + boundary.chars().count() + CRLF.len(),
    )
}
