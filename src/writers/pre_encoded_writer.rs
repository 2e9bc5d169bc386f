use encoding_rs::Encoding;

use crate::EncodeError;
use crate::FormValue;
use crate::Output;
use crate::writers::PartWriter;

/// Appends a body already assembled by this encoder, byte for byte.
///
/// No boundary line or headers are added; the pre-encoded form keeps
/// its own internal boundary. This lets a sub-form travel as a single
/// named value of an outer form.
pub struct PreEncodedWriter;

impl PartWriter for PreEncodedWriter {
    fn is_applicable(&self, value: &FormValue) -> bool {
        matches!(value, FormValue::PreEncoded(_))
    }

    fn write_parts(
        &self,
        output: &Output,
        _boundary: &str,
        key: &str,
        value: &FormValue,
    ) -> Result<(), EncodeError> {
        match value {
            FormValue::PreEncoded(form) => output.write_bytes(form.as_bytes()),
            other => Err(EncodeError::unsupported(key, other.kind())),
        }
    }

    fn length(
        &self,
        _charset: &'static Encoding,
        _boundary: &str,
        _key: &str,
        value: &FormValue,
    ) -> usize {
        match value {
            FormValue::PreEncoded(form) => form.len(),
            _ => 0,
        }
    }
}
