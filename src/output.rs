use bytes::Bytes;
use encoding_rs::Encoding;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::EncodeError;

/// The `\r\n` line terminator multipart bodies are framed with.
pub const CRLF: &str = "\r\n";

const DEFAULT_CAPACITY: usize = 1_024;

/// Capacity ceiling, kept in line with the largest array most
/// allocators will hand out without alignment padding issues.
const MAX_CAPACITY: usize = i32::MAX as usize - 8;

///
/// A growable byte sink the part writers emit into.
///
/// The charset is fixed at construction; [`Output::write_str()`]
/// transcodes through it. Once [`Output::close()`] has been called,
/// every further write fails with [`EncodeError::ClosedSink`].
///
/// Close and capacity growth are serialized under an internal lock,
/// so concurrent writers cannot tear the backing storage. No ordering
/// is guaranteed between overlapping writes; treat each `Output` as
/// owned by a single logical encode call.
///
pub struct Output {
    state: Mutex<OutputState>,
    charset: &'static Encoding,
}

struct OutputState {
    buffer: Vec<u8>,
    position: usize,
    open: bool,
}

impl Output {
    /// Creates a new `Output` with a small default capacity.
    pub fn new(charset: &'static Encoding) -> Self {
        Self::with_capacity(charset, DEFAULT_CAPACITY)
    }

    /// Creates a new `Output` pre-sized to `capacity` bytes,
    /// clamped to the maximum buffer size.
    pub fn with_capacity(charset: &'static Encoding, capacity: usize) -> Self {
        let capacity = capacity.min(MAX_CAPACITY);

        Self {
            state: Mutex::new(OutputState {
                buffer: vec![0; capacity],
                position: 0,
                open: true,
            }),
            charset,
        }
    }

    /// The charset strings are transcoded through.
    pub fn charset(&self) -> &'static Encoding {
        self.charset
    }

    /// Encodes the string under this output's charset and appends it.
    ///
    /// Fails with [`EncodeError::Encoding`] when the charset cannot
    /// represent the string.
    pub fn write_str(&self, string: &str) -> Result<(), EncodeError> {
        let (encoded, _, had_errors) = self.charset.encode(string);
        if had_errors {
            return Err(EncodeError::Encoding {
                charset: self.charset.name(),
            });
        }

        self.write_bytes(&encoded)
    }

    /// Appends the bytes verbatim.
    pub fn write_bytes(&self, bytes: &[u8]) -> Result<(), EncodeError> {
        let mut state = self.lock_state();
        state.ensure_open()?;

        if !bytes.is_empty() {
            let position = state.position;
            let new_position = position
                .checked_add(bytes.len())
                .filter(|position| *position <= MAX_CAPACITY)
                .ok_or(EncodeError::Overflow)?;

            state.ensure_capacity(new_position);
            state.buffer[position..new_position].copy_from_slice(bytes);
            state.position = new_position;
        }

        Ok(())
    }

    /// Appends `length` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + length` is out of bounds of `bytes`.
    pub fn write_bytes_range(
        &self,
        bytes: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<(), EncodeError> {
        self.write_bytes(&bytes[offset..offset + length])
    }

    /// Returns a copy of everything written so far.
    pub fn bytes(&self) -> Bytes {
        let state = self.lock_state();
        Bytes::copy_from_slice(&state.buffer[..state.position])
    }

    /// The number of bytes written so far.
    pub fn position(&self) -> usize {
        self.lock_state().position
    }

    /// The current size of the backing storage.
    pub fn capacity(&self) -> usize {
        self.lock_state().buffer.len()
    }

    /// Returns the entire backing array, including any unwritten
    /// capacity beyond the write position.
    #[deprecated(note = "returns the full backing array, use `bytes()` for the written prefix")]
    pub fn to_byte_array(&self) -> Vec<u8> {
        self.lock_state().buffer.clone()
    }

    /// Closes this output. Idempotent; all writes after the first
    /// close fail with [`EncodeError::ClosedSink`].
    pub fn close(&self) {
        self.lock_state().open = false;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, OutputState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutputState {
    fn ensure_open(&self) -> Result<(), EncodeError> {
        if self.open {
            Ok(())
        } else {
            Err(EncodeError::ClosedSink)
        }
    }

    /// Grows the backing storage to hold at least `requested` bytes.
    ///
    /// Growth allocates a fresh array of `max(requested, capacity * 2)`,
    /// saturated at the maximum buffer size, and copies the written
    /// prefix across. The write position is untouched.
    fn ensure_capacity(&mut self, requested: usize) {
        if requested <= self.buffer.len() {
            return;
        }

        let mut capacity = self.buffer.len().saturating_mul(2).min(MAX_CAPACITY);
        if capacity < requested {
            capacity = requested;
        }

        let mut grown = vec![0; capacity];
        grown[..self.position].copy_from_slice(&self.buffer[..self.position]);
        self.buffer = grown;
    }
}


#[cfg(test)]
mod test_write_bytes {
    use super::*;
    use encoding_rs::UTF_8;

    #[test]
    fn it_should_append_in_call_order() {
        let output = Output::new(UTF_8);

        output.write_bytes(b"one").unwrap();
        output.write_bytes(b"two").unwrap();

        assert_eq!(output.bytes().as_ref(), b"onetwo");
    }

    #[test]
    fn it_should_write_a_range_of_the_slice() {
        let output = Output::new(UTF_8);

        output.write_bytes_range(b"--payload--", 2, 7).unwrap();

        assert_eq!(output.bytes().as_ref(), b"payload");
    }

    #[test]
    fn it_should_grow_past_the_initial_capacity() {
        let output = Output::with_capacity(UTF_8, 4);

        output.write_bytes(b"0123456789").unwrap();

        assert_eq!(output.bytes().as_ref(), b"0123456789");
        assert!(output.capacity() >= 10);
    }

    #[test]
    fn it_should_double_capacity_when_growing() {
        let output = Output::with_capacity(UTF_8, 64);

        output.write_bytes(&[7; 65]).unwrap();

        assert_eq!(output.capacity(), 128);
        assert_eq!(output.position(), 65);
    }

    #[test]
    fn it_should_preserve_the_written_prefix_across_growth() {
        let output = Output::with_capacity(UTF_8, 4);

        output.write_bytes(b"abcd").unwrap();
        output.write_bytes(b"efgh").unwrap();

        assert_eq!(output.bytes().as_ref(), b"abcdefgh");
    }
}
