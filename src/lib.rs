//!
//! Multipart Form Body is a library for encoding name/value pairs into a
//! `multipart/form-data` byte stream (RFC 2046 / RFC 7578), suitable as
//! the body of an HTTP request:
//!
//!  * You build [`FormValue`]s for your scalars, files, and byte blobs,
//!  * hand them to a [`MultipartEncoder`] as ordered `(key, value)` pairs,
//!  * receive back an [`EncodedForm`] holding the body bytes and the boundary,
//!  * then attach both to a request with whatever HTTP client you use.
//!
//! The whole body is buffered in memory; file content arrives pre-read
//! as bytes, and the encoder never opens files or performs I/O itself.
//!
//! ## Getting Started
//!
//! Encode a couple of fields and a file:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn ::std::error::Error>> {
//! #
//! use ::multipart_form_body::FilePart;
//! use ::multipart_form_body::FormValue;
//! use ::multipart_form_body::MultipartEncoder;
//!
//! let encoder = MultipartEncoder::new();
//! let form = encoder.encode(&[
//!     ("name", FormValue::from("Joe")),
//!     ("animals", FormValue::from("foxes")),
//!     (
//!         "photo",
//!         FormValue::from(
//!             FilePart::new(b"not really a png".as_slice()).file_name("me.png"),
//!         ),
//!     ),
//! ])?;
//!
//! // form.content_type() -> "multipart/form-data; boundary=..."
//! // form.as_bytes()     -> the request body
//! #
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! ### Repeated Keys
//!
//! A [`FormValue::ManyScalars`] or [`FormValue::ManyFiles`] sends one
//! part per element, all under the same key, in sequence order:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn ::std::error::Error>> {
//! #
//! use ::multipart_form_body::FormValue;
//! use ::multipart_form_body::MultipartEncoder;
//!
//! let tags: FormValue = ["rust", "http", "forms"].into_iter().collect();
//!
//! let form = MultipartEncoder::new().encode(&[("tags", tags)])?;
//! #
//! # Ok(())
//! # }
//! ```
//!
//! Empty sequences are rejected, as no part could carry the key.
//!
//! ### Nested Forms
//!
//! An already encoded form can travel as a single named value of an
//! outer form, via [`FormValue::PreEncoded`]. Its bytes are appended
//! verbatim, keeping their own boundary.
//!
//! ### Charsets
//!
//! The encoder defaults to UTF-8. [`MultipartEncoder::with_charset()`]
//! accepts any [`encoding_rs`] encoding; scalar parts declare it in
//! their `Content-Type`, and strings that the charset cannot represent
//! fail the encode call with [`EncodeError::Encoding`].
//!

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod util;
pub mod writers;

mod encode_error;
pub use self::encode_error::*;

mod encoded_form;
pub use self::encoded_form::*;

mod file_part;
pub use self::file_part::*;

mod form_value;
pub use self::form_value::*;

mod multipart_encoder;
pub use self::multipart_encoder::*;

mod output;
pub use self::output::Output;

mod scalar_value;
pub use self::scalar_value::*;

pub use ::encoding_rs;
