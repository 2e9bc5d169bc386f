use bytes::Bytes;
use encoding_rs::Encoding;

use crate::EncodeError;
use crate::FormValue;
use crate::Output;
use crate::writers::PartWriter;
use crate::writers::part_writer::file_metadata;
use crate::writers::part_writer::predict_byte_count;

/// Writes an opaque byte blob as one part.
///
/// Behaves like the single-file writer, except the filename comes
/// from the value's out-of-band hint and is omitted entirely when
/// no hint was given.
pub struct RawBytesWriter;

impl RawBytesWriter {
    fn write_blob_inner(
        &self,
        output: &Output,
        key: &str,
        bytes: &Bytes,
        file_name: Option<&str>,
    ) -> Result<(), EncodeError> {
        let metadata = file_metadata(key, file_name, None);
        output.write_str(&metadata)?;
        output.write_bytes(bytes)?;

        Ok(())
    }
}

impl PartWriter for RawBytesWriter {
    fn is_applicable(&self, value: &FormValue) -> bool {
        matches!(value, FormValue::RawBytes { .. })
    }

    fn write_inner(
        &self,
        output: &Output,
        key: &str,
        value: &FormValue,
    ) -> Result<(), EncodeError> {
        match value {
            FormValue::RawBytes { bytes, file_name } => {
                self.write_blob_inner(output, key, bytes, file_name.as_deref())
            }
            other => Err(EncodeError::unsupported(key, other.kind())),
        }
    }

    fn inner_length(&self, charset: &'static Encoding, key: &str, value: &FormValue) -> usize {
        match value {
            FormValue::RawBytes { bytes, file_name } => {
                let metadata = file_metadata(key, file_name.as_deref(), None);
                predict_byte_count(charset, metadata.chars().count()) + bytes.len()
            }
            _ => 0,
        }
    }
}
