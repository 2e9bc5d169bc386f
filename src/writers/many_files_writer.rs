use encoding_rs::Encoding;

use crate::EncodeError;
use crate::FormValue;
use crate::Output;
use crate::writers::PartWriter;
use crate::writers::SingleFileWriter;
use crate::writers::part_writer::framing_length;
use crate::writers::part_writer::write_framed;

/// Writes a non-empty sequence of files, delegating each element to
/// the single-file writer. Every element becomes its own framed part,
/// all sharing the same key.
pub struct ManyFilesWriter {
    file_writer: SingleFileWriter,
}

impl ManyFilesWriter {
    pub fn new() -> Self {
        Self {
            file_writer: SingleFileWriter,
        }
    }
}

impl PartWriter for ManyFilesWriter {
    fn is_applicable(&self, value: &FormValue) -> bool {
        matches!(value, FormValue::ManyFiles(files) if !files.is_empty())
    }

    fn write_parts(
        &self,
        output: &Output,
        boundary: &str,
        key: &str,
        value: &FormValue,
    ) -> Result<(), EncodeError> {
        let FormValue::ManyFiles(files) = value else {
            return Err(EncodeError::unsupported(key, value.kind()));
        };

        for file in files {
            write_framed(output, boundary, |output| {
                self.file_writer.write_file_inner(output, key, file)
            })?;
        }

        Ok(())
    }

    fn length(
        &self,
        charset: &'static Encoding,
        boundary: &str,
        key: &str,
        value: &FormValue,
    ) -> usize {
        let FormValue::ManyFiles(files) = value else {
            return 0;
        };

        files
            .iter()
            .map(|file| {
                framing_length(charset, boundary)
                    + self.file_writer.file_inner_length(charset, key, file)
            })
            .sum()
    }
}

#[cfg(test)]
mod test_is_applicable {
    use super::*;
    use crate::FilePart;

    #[test]
    fn it_should_not_apply_to_an_empty_sequence() {
        let writer = ManyFilesWriter::new();

        assert!(!writer.is_applicable(&FormValue::ManyFiles(vec![])));
    }

    #[test]
    fn it_should_apply_to_a_non_empty_sequence() {
        let writer = ManyFilesWriter::new();
        let value = FormValue::ManyFiles(vec![FilePart::new(b"x".as_slice())]);

        assert!(writer.is_applicable(&value));
    }
}
