/* tests/helpers/mod.rs */

/// Decode a hex fixture, ignoring spaces between bytes.
pub(crate) fn bytes(hex: &str) -> Vec<u8> {
	let compact: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
	hex::decode(compact).unwrap()
}

/// A small little-endian record: 4-byte tag, u16 count, that many u16
/// values, then an 8-byte NUL-padded name.
pub(crate) fn record() -> Vec<u8> {
	let mut rec = bytes("4d 54 72 6b"); // "MTrk"
	rec.extend_from_slice(&[0x03, 0x00]); // count
	rec.extend_from_slice(&[0x01, 0x00, 0x34, 0x12, 0xFF, 0xFF]);
	rec.extend_from_slice(b"piano\0\0\0");
	rec
}

/// Every byte value once, in order.
pub(crate) fn all_bytes() -> Vec<u8> {
	(0..=255u8).collect()
}
