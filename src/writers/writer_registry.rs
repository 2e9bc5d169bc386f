use crate::EncodeError;
use crate::FormValue;
use crate::writers::ManyFilesWriter;
use crate::writers::ManyScalarsWriter;
use crate::writers::PartWriter;
use crate::writers::PreEncodedWriter;
use crate::writers::RawBytesWriter;
use crate::writers::ScalarWriter;
use crate::writers::SingleFileWriter;

///
/// The ordered set of part writers the encoder dispatches over.
///
/// Selection walks the list and picks the first writer whose
/// [`PartWriter::is_applicable()`] accepts the value. The order puts
/// collection writers before their singular counterparts, so a
/// sequence is never mistaken for a single value. When nothing
/// matches, the lookup fails naming the offending key.
///
pub struct WriterRegistry {
    writers: Vec<Box<dyn PartWriter + Send + Sync>>,
}

impl WriterRegistry {
    pub fn new() -> Self {
        Self {
            writers: vec![
                Box::new(ManyFilesWriter::new()),
                Box::new(SingleFileWriter),
                Box::new(RawBytesWriter),
                Box::new(PreEncodedWriter),
                Box::new(ManyScalarsWriter::new()),
                Box::new(ScalarWriter),
            ],
        }
    }

    /// Finds the first writer applicable to the value.
    pub fn find(
        &self,
        key: &str,
        value: &FormValue,
    ) -> Result<&(dyn PartWriter + Send + Sync), EncodeError> {
        self.writers
            .iter()
            .map(|writer| writer.as_ref())
            .find(|writer| writer.is_applicable(value))
            .ok_or_else(|| EncodeError::unsupported(key, value.kind()))
    }
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
