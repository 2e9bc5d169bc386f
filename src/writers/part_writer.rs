use encoding_rs::Encoding;
use mime::Mime;

use crate::EncodeError;
use crate::FormValue;
use crate::Output;
use crate::output::CRLF;

/// The fallback inner estimate, in characters, for writers that
/// do not predict their own size.
const DEFAULT_INNER_ESTIMATE: usize = 1_024;

///
/// One encoder for one shape of [`FormValue`].
///
/// Singular writers implement [`PartWriter::write_inner()`], emitting
/// the part's headers and body; the default [`PartWriter::write_parts()`]
/// wraps that with the `--boundary` opening line and the trailing CRLF.
/// Composite writers override `write_parts()` instead, and frame each
/// element separately.
///
/// [`PartWriter::length()`] predicts an upper bound of the bytes
/// `write_parts()` will emit. It is only used to pre-size the output
/// buffer, which grows on demand anyway, but keeping it an over-estimate
/// preserves single-allocation encoding.
///
pub trait PartWriter {
    /// Whether this writer claims the given value.
    fn is_applicable(&self, value: &FormValue) -> bool;

    /// Emits one or more complete parts, each with its own opening
    /// boundary line and trailing CRLF.
    fn write_parts(
        &self,
        output: &Output,
        boundary: &str,
        key: &str,
        value: &FormValue,
    ) -> Result<(), EncodeError> {
        write_framed(output, boundary, |output| {
            self.write_inner(output, key, value)
        })
    }

    /// Emits the part's headers, the blank separator line, and the body.
    ///
    /// Composite writers bypass this by overriding
    /// [`PartWriter::write_parts()`] directly.
    fn write_inner(
        &self,
        output: &Output,
        key: &str,
        value: &FormValue,
    ) -> Result<(), EncodeError> {
        let _ = (output, key, value);
        Ok(())
    }

    /// An upper bound on the bytes [`PartWriter::write_parts()`] emits.
    fn length(
        &self,
        charset: &'static Encoding,
        boundary: &str,
        key: &str,
        value: &FormValue,
    ) -> usize {
        framing_length(charset, boundary) + self.inner_length(charset, key, value)
    }

    /// An upper bound on the bytes [`PartWriter::write_inner()`] emits.
    fn inner_length(&self, charset: &'static Encoding, key: &str, value: &FormValue) -> usize {
        let _ = (key, value);
        predict_byte_count(charset, DEFAULT_INNER_ESTIMATE)
    }
}

/// Emits `--boundary\r\n`, the inner content, then the trailing CRLF.
pub(crate) fn write_framed<F>(output: &Output, boundary: &str, inner: F) -> Result<(), EncodeError>
where
    F: FnOnce(&Output) -> Result<(), EncodeError>,
{
    output.write_str("--")?;
    output.write_str(boundary)?;
    output.write_str(CRLF)?;
    inner(output)?;
    output.write_str(CRLF)?;

    Ok(())
}

/// The predicted cost of the framing added by [`write_framed()`].
pub(crate) fn framing_length(charset: &'static Encoding, boundary: &str) -> usize {
    predict_byte_count(charset, "--".len() + boundary.chars().count() + CRLF.len() * 2)
}

/// Predicts the encoded size of `char_count` characters under the
/// charset, using its worst-case bytes per character.
pub(crate) fn predict_byte_count(charset: &'static Encoding, char_count: usize) -> usize {
    max_bytes_per_char(charset) * char_count
}

fn max_bytes_per_char(charset: &'static Encoding) -> usize {
    if charset.is_single_byte() { 1 } else { 4 }
}

/// Builds the header block shared by the file and raw-bytes writers:
///
/// ```text
/// Content-Disposition: form-data; name="<key>"[; filename="<name>"]\r\n
/// Content-Type: <resolved>\r\n
/// Content-Transfer-Encoding: binary\r\n
/// \r\n
/// ```
///
/// The content type resolves as: explicit hint, else a guess from the
/// filename's extension, else `application/octet-stream`.
pub(crate) fn file_metadata(
    key: &str,
    file_name: Option<&str>,
    content_type: Option<&Mime>,
) -> String {
    let mut metadata = format!("Content-Disposition: form-data; name=\"{key}\"");
    if let Some(file_name) = file_name {
        metadata.push_str("; filename=\"");
        metadata.push_str(file_name);
        metadata.push('"');
    }

    metadata.push_str(CRLF);
    metadata.push_str("Content-Type: ");
    metadata.push_str(&resolve_content_type(file_name, content_type));
    metadata.push_str(CRLF);
    metadata.push_str("Content-Transfer-Encoding: binary");
    metadata.push_str(CRLF);
    metadata.push_str(CRLF);

    metadata
}

fn resolve_content_type(file_name: Option<&str>, content_type: Option<&Mime>) -> String {
    if let Some(content_type) = content_type {
        return content_type.to_string();
    }

    file_name
        .and_then(|file_name| mime_guess::from_path(file_name).first())
        .unwrap_or(mime::APPLICATION_OCTET_STREAM)
        .to_string()
}
