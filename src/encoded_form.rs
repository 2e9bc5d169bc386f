use bytes::Bytes;

/// A fully assembled multipart body, together with the boundary
/// that frames it.
///
/// The boundary is needed by the caller to build the enclosing
/// `Content-Type` header; [`EncodedForm::content_type()`] builds
/// the full header value.
///
/// An `EncodedForm` can also be sent as a single named value inside
/// another form, via [`FormValue::PreEncoded`](crate::FormValue::PreEncoded).
/// Its bytes are then appended verbatim, with no extra framing.
#[derive(Debug, Clone)]
pub struct EncodedForm {
    bytes: Bytes,
    boundary: String,
}

impl EncodedForm {
    pub(crate) fn new(bytes: Bytes, boundary: String) -> Self {
        Self { bytes, boundary }
    }

    /// The encoded multipart body.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes this form, returning the encoded body.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// The boundary used between the parts of this body.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Returns the content type to send this form under.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// The number of bytes in the encoded body.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
