use anyhow::Context;
use bytes::Bytes;
use mime::Mime;
use std::fmt::Display;

///
/// An in-memory file to be sent as one part of a multipart form.
///
/// Create one using [`FilePart::new()`], then optionally attach a
/// filename and a mime type. The content arrives pre-read as bytes;
/// no file handles are ever opened by the encoder.
///
/// When no mime type is set, one is guessed from the filename's
/// extension, falling back to `application/octet-stream`.
///
#[derive(Debug, Clone)]
pub struct FilePart {
    pub(crate) bytes: Bytes,
    pub(crate) file_name: Option<String>,
    pub(crate) mime_type: Option<Mime>,
}

impl FilePart {
    /// Creates a new file part holding the given bytes.
    pub fn new<B>(bytes: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self {
            bytes: bytes.into(),
            file_name: None,
            mime_type: None,
        }
    }

    /// Sets the filename for this file.
    ///
    /// By default there is no filename. When absent, the part's
    /// `Content-Disposition` uses the form key as the filename.
    pub fn file_name<T>(mut self, file_name: T) -> Self
    where
        T: Display,
    {
        self.file_name = Some(file_name.to_string());
        self
    }

    /// Sets an explicit mime type for this file,
    /// overriding any guess from the filename.
    pub fn mime_type<M>(mut self, mime_type: M) -> Self
    where
        M: AsRef<str>,
    {
        let raw_mime_type = mime_type.as_ref();
        let parsed_mime_type = raw_mime_type
            .parse()
            .with_context(|| format!("Failed to parse '{raw_mime_type}' as a Mime type"))
            .unwrap();

        self.mime_type = Some(parsed_mime_type);

        self
    }

    /// The raw content of this file.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}



#[cfg(test)]
mod test_mime_type {
    use super::*;

    #[test]
    fn it_should_use_mime_type_set() {
        let part = FilePart::new("some_text".as_bytes()).mime_type("application/json");

        assert_eq!(part.mime_type, Some(mime::APPLICATION_JSON));
    }

    #[test]
    #[should_panic]
    fn it_should_error_if_invalid_mime_type() {
        let part = FilePart::new("some_text".as_bytes());
        part.mime_type("🦊");

        assert!(false);
    }
}
