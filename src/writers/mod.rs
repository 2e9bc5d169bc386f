//!
//! The per value-kind part writers, and the registry that
//! dispatches over them.
//!
//! Each writer encodes one shape of [`FormValue`](crate::FormValue)
//! into one or more complete multipart parts. The
//! [`WriterRegistry`] holds them in dispatch order.
//!

mod many_files_writer;
pub use self::many_files_writer::*;

mod many_scalars_writer;
pub use self::many_scalars_writer::*;

mod part_writer;
pub use self::part_writer::PartWriter;
pub(crate) use self::part_writer::predict_byte_count;

mod pre_encoded_writer;
pub use self::pre_encoded_writer::*;

mod raw_bytes_writer;
pub use self::raw_bytes_writer::*;

mod scalar_writer;
pub use self::scalar_writer::*;

mod single_file_writer;
pub use self::single_file_writer::*;

mod writer_registry;
pub use self::writer_registry::*;
