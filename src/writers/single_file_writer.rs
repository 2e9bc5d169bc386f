use encoding_rs::Encoding;

use crate::EncodeError;
use crate::FilePart;
use crate::FormValue;
use crate::Output;
use crate::writers::PartWriter;
use crate::writers::part_writer::file_metadata;
use crate::writers::part_writer::predict_byte_count;

/// Writes a single [`FilePart`] as one part, with file headers
/// and the content bytes appended verbatim.
pub struct SingleFileWriter;

impl SingleFileWriter {
    pub(crate) fn write_file_inner(
        &self,
        output: &Output,
        key: &str,
        file: &FilePart,
    ) -> Result<(), EncodeError> {
        // A file with no name still gets a filename, the bare key.
        let file_name = file.file_name.as_deref().unwrap_or(key);

        let metadata = file_metadata(key, Some(file_name), file.mime_type.as_ref());
        output.write_str(&metadata)?;
        output.write_bytes(&file.bytes)?;

        Ok(())
    }

    pub(crate) fn file_inner_length(
        &self,
        charset: &'static Encoding,
        key: &str,
        file: &FilePart,
    ) -> usize {
        let file_name = file.file_name.as_deref().unwrap_or(key);
        let metadata = file_metadata(key, Some(file_name), file.mime_type.as_ref());

        predict_byte_count(charset, metadata.chars().count()) + file.bytes.len()
    }
}

impl PartWriter for SingleFileWriter {
    fn is_applicable(&self, value: &FormValue) -> bool {
        matches!(value, FormValue::File(_))
    }

    fn write_inner(
        &self,
        output: &Output,
        key: &str,
        value: &FormValue,
    ) -> Result<(), EncodeError> {
        match value {
            FormValue::File(file) => self.write_file_inner(output, key, file),
            other => Err(EncodeError::unsupported(key, other.kind())),
        }
    }

    fn inner_length(&self, charset: &'static Encoding, key: &str, value: &FormValue) -> usize {
        match value {
            FormValue::File(file) => self.file_inner_length(charset, key, file),
            _ => 0,
        }
    }
}
