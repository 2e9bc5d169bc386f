use encoding_rs::Encoding;

use crate::EncodeError;
use crate::FormValue;
use crate::Output;
use crate::ScalarValue;
use crate::output::CRLF;
use crate::writers::PartWriter;
use crate::writers::part_writer::predict_byte_count;

const CONTENT_DISPOSITION_PREFIX: &str = "Content-Disposition: form-data; name=\"";
const CONTENT_TYPE_PREFIX: &str = "Content-Type: text/plain; charset=";

/// Header characters emitted around the key, the charset name,
/// and the value itself.
const BASE_LENGTH: usize =
    CONTENT_DISPOSITION_PREFIX.len() + 1 + CONTENT_TYPE_PREFIX.len() + CRLF.len() * 3;

/// Writes numbers, booleans, and text as `text/plain` parts.
pub struct ScalarWriter;

impl ScalarWriter {
    pub(crate) fn write_scalar_inner(
        &self,
        output: &Output,
        key: &str,
        scalar: &ScalarValue,
    ) -> Result<(), EncodeError> {
        output.write_str(CONTENT_DISPOSITION_PREFIX)?;
        output.write_str(key)?;
        output.write_str("\"")?;
        output.write_str(CRLF)?;
        output.write_str(CONTENT_TYPE_PREFIX)?;
        output.write_str(output.charset().name())?;
        output.write_str(CRLF)?;
        output.write_str(CRLF)?;
        output.write_str(&scalar.to_string())?;

        Ok(())
    }

    pub(crate) fn scalar_inner_length(
        &self,
        charset: &'static Encoding,
        key: &str,
        scalar: &ScalarValue,
    ) -> usize {
        let char_count = BASE_LENGTH
            + key.chars().count()
            + charset.name().len()
            + scalar.to_string().chars().count();

        predict_byte_count(charset, char_count)
    }
}

impl PartWriter for ScalarWriter {
    fn is_applicable(&self, value: &FormValue) -> bool {
        matches!(value, FormValue::Scalar(_))
    }

    fn write_inner(
        &self,
        output: &Output,
        key: &str,
        value: &FormValue,
    ) -> Result<(), EncodeError> {
        match value {
            FormValue::Scalar(scalar) => self.write_scalar_inner(output, key, scalar),
            other => Err(EncodeError::unsupported(key, other.kind())),
        }
    }

    fn inner_length(&self, charset: &'static Encoding, key: &str, value: &FormValue) -> usize {
        match value {
            FormValue::Scalar(scalar) => self.scalar_inner_length(charset, key, scalar),
            _ => predict_byte_count(charset, BASE_LENGTH),
        }
    }
}
