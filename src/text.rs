/* src/text.rs */

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

/// Decode a fixed-length text field.
///
/// NUL bytes become spaces and invalid UTF-8 sequences become U+FFFD, so
/// legacy padded fields decode without failing.
///
/// ```
/// assert_eq!(bytereader::decode_text(b"A\0B"), "A B");
/// assert_eq!(bytereader::decode_text(&[0x41, 0xFF]), "A\u{FFFD}");
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
	let bytes: Cow<'_, [u8]> = if bytes.contains(&0) {
		bytes
			.iter()
			.map(|&b| if b == 0 { b' ' } else { b })
			.collect::<Vec<u8>>()
			.into()
	} else {
		bytes.into()
	};
	String::from_utf8_lossy(&bytes).into_owned()
}
