/* src/lib.rs */

//! Forward-only cursor reader for binary data held in memory.
//!
//! [`ByteReader`] walks a byte slice with a single cursor and decodes
//! little-endian shorts, raw byte runs and fixed-length text fields. It is
//! meant to sit under format parsers that compose these primitives into
//! records.
//!
//! End of input is reported in two ways, and callers branch on both:
//!
//! - single-value reads ([`ByteReader::read_byte`],
//!   [`ByteReader::peek_byte`], [`ByteReader::read_short`]) return
//!   `Err(`[`EOF`]`)`;
//! - run reads ([`ByteReader::read_bytes`], [`ByteReader::read_slice`],
//!   [`ByteReader::read_string`]) return fewer bytes than requested.
//!
//! ```
//! use bytereader::{ByteReader, EOF};
//!
//! let data = b"WAVE\x02\x00\x10\x27";
//! let mut r = ByteReader::new(data);
//! assert_eq!(r.read_string(4), "WAVE");
//! assert_eq!(r.read_short(false), Ok(2));
//! assert_eq!(r.read_short(false), Ok(10_000));
//! assert_eq!(r.read_short(true), Err(EOF));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod reader;
mod text;

pub use crate::error::{EOF, Eof};
pub use crate::reader::ByteReader;
pub use crate::text::decode_text;
