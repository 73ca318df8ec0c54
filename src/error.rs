/* src/error.rs */

/// End-of-stream signal returned by single-value reads.
///
/// [`ByteReader::read_byte`](crate::ByteReader::read_byte),
/// [`ByteReader::peek_byte`](crate::ByteReader::peek_byte) and
/// [`ByteReader::read_short`](crate::ByteReader::read_short) return it in the
/// `Err` arm, so it can never be confused with a byte or a short value.
/// Slice and string reads never produce it; they return fewer bytes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("end of stream")]
pub struct Eof;

/// Shared end-of-stream constant for comparing read results.
///
/// ```
/// use bytereader::{ByteReader, EOF};
///
/// let mut r = ByteReader::new(&[]);
/// assert_eq!(r.read_byte(), Err(EOF));
/// ```
pub const EOF: Eof = Eof;

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::string::ToString;

	#[test]
	fn display() {
		assert_eq!(EOF.to_string(), "end of stream");
	}

	#[test]
	fn constant_is_the_unit_value() {
		assert_eq!(EOF, Eof);
	}
}
