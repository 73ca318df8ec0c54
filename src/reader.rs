/* src/reader.rs */

use alloc::string::String;
use alloc::vec::Vec;

use log::trace;

use crate::error::{EOF, Eof};
use crate::text::decode_text;

/// Forward-only reader over an in-memory byte buffer.
///
/// Every read advances the same cursor, and the cursor never moves
/// backwards. Single-value reads report the end of the buffer with
/// [`EOF`]; slice and string reads report it by returning fewer bytes than
/// requested.
///
/// ```
/// use bytereader::{ByteReader, EOF};
///
/// let mut r = ByteReader::new(&[0x34, 0x12, b'h', b'i', 0x00]);
/// assert_eq!(r.read_short(false), Ok(0x1234));
/// assert_eq!(r.read_string(8), "hi ");
/// assert_eq!(r.read_byte(), Err(EOF));
/// ```
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> ByteReader<'a> {
	/// Create a reader positioned at the start of `data`.
	#[must_use]
	pub fn new(data: &'a [u8]) -> Self {
		Self { data, pos: 0 }
	}

	/// Offset of the next byte to be read.
	#[must_use]
	pub fn current_address(&self) -> usize {
		self.pos
	}

	/// Number of bytes left after the cursor.
	#[must_use]
	pub fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	/// Whether the cursor has reached the end of the buffer.
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.remaining() == 0
	}

	/// Total length of the underlying buffer.
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether the underlying buffer is empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// The whole underlying buffer, independent of the cursor.
	#[must_use]
	pub fn as_bytes(&self) -> &'a [u8] {
		self.data
	}

	/// The unread tail of the buffer. Does not move the cursor.
	#[must_use]
	pub fn rest(&self) -> &'a [u8] {
		&self.data[self.pos..]
	}

	/// Read one byte and advance past it.
	///
	/// # Errors
	///
	/// Returns [`EOF`] without moving the cursor when no bytes remain.
	pub fn read_byte(&mut self) -> Result<u8, Eof> {
		let Some(&b) = self.data.get(self.pos) else {
			trace!("read_byte: end of stream at {}", self.pos);
			return Err(EOF);
		};
		self.pos += 1;
		Ok(b)
	}

	/// Look at the next byte without consuming it.
	///
	/// # Errors
	///
	/// Returns [`EOF`] when no bytes remain.
	pub fn peek(&self) -> Result<u8, Eof> {
		self.peek_byte(0)
	}

	/// Look at the byte `ahead` positions past the cursor without consuming
	/// anything.
	///
	/// # Errors
	///
	/// Returns [`EOF`] when that position lies outside the buffer.
	pub fn peek_byte(&self, ahead: usize) -> Result<u8, Eof> {
		self.pos
			.checked_add(ahead)
			.and_then(|i| self.data.get(i))
			.copied()
			.ok_or(EOF)
	}

	/// Read a little-endian `u16`.
	///
	/// If only one byte remains it is consumed either way; with
	/// `allow_partial_on_eof` its value is returned on its own.
	///
	/// # Errors
	///
	/// Returns [`EOF`] when no bytes remain, or when only one byte remains and
	/// `allow_partial_on_eof` is false.
	pub fn read_short(&mut self, allow_partial_on_eof: bool) -> Result<u16, Eof> {
		let low = self.read_byte()?;
		match self.read_byte() {
			Ok(high) => Ok(u16::from_le_bytes([low, high])),
			Err(_) if allow_partial_on_eof => Ok(u16::from(low)),
			Err(e) => Err(e),
		}
	}

	/// Borrow up to `length` bytes and advance past them.
	///
	/// The result is shorter than `length` when the buffer runs out; that is
	/// the only end-of-stream signal.
	pub fn read_slice(&mut self, length: usize) -> &'a [u8] {
		let n = length.min(self.remaining());
		if n < length {
			trace!(
				"short read at {}: wanted {length} bytes, got {n}",
				self.pos
			);
		}
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		slice
	}

	/// Copy up to `length` bytes and advance past them.
	///
	/// Like [`read_slice`](Self::read_slice), a result shorter than `length`
	/// means the end of the buffer was reached. Never returns [`EOF`].
	pub fn read_bytes(&mut self, length: usize) -> Vec<u8> {
		self.read_slice(length).to_vec()
	}

	/// Read a fixed-length text field of up to `length` bytes.
	///
	/// Decoded with [`decode_text`]: NUL bytes become spaces and invalid
	/// UTF-8 becomes U+FFFD. A truncated field yields a shorter string.
	pub fn read_string(&mut self, length: usize) -> String {
		decode_text(self.read_slice(length))
	}
}

impl<'a> From<&'a [u8]> for ByteReader<'a> {
	fn from(data: &'a [u8]) -> Self {
		Self::new(data)
	}
}
