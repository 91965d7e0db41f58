// SPDX-License-Identifier: Apache-2.0

//! Low level Syrup token scanning.
//!
//! This module does **not** know about the `Value` tree; it only knows how
//! to recognize one item's prefix on the wire and dispatch on its
//! terminator/marker byte. See below for an overview of what a Syrup item
//! looks like.
//!
//! ```text
//! true / false           -> "t" / "f"                    (no prefix)
//! integer                -> digit+ ("+" | "-")            (magnitude, then sign)
//! float                   -> "D" byte{8}                   (IEEE-754 big-endian)
//! bytes / text / symbol   -> digit+ (":" | "\"" | "'") octet{len}
//! list / set / dict / rec -> "[" ... "]"  "#" ... "$"  "{" ... "}"  "<" ... ">"
//! ```
//!
//! Everything here operates on plain `&[u8]` slices so that the decoder can
//! hand back zero-copy views into the caller's buffer. `dec` implements the
//! general-purpose scanner; `enc` implements the mirror-image writer.

mod dec;
mod enc;
mod hdr;

pub use dec::*;
pub use enc::*;
pub use hdr::*;

/// Marker byte for `true`.
pub const TRUE: u8 = b't';
/// Marker byte for `false`.
pub const FALSE: u8 = b'f';
/// Marker byte introducing an 8-byte big-endian `f64`.
pub const FLOAT: u8 = b'D';
/// Terminator byte introducing a string payload.
pub const TEXT: u8 = b'"';
/// Terminator byte introducing a symbol payload.
pub const SYMBOL: u8 = b'\'';
/// Terminator byte introducing a bytes payload.
pub const BYTES: u8 = b':';
/// Sign byte for non-negative integers.
pub const PLUS: u8 = b'+';
/// Sign byte for negative integers.
pub const MINUS: u8 = b'-';
/// Opens a list.
pub const LIST_OPEN: u8 = b'[';
/// Closes a list.
pub const LIST_CLOSE: u8 = b']';
/// Opens a set.
pub const SET_OPEN: u8 = b'#';
/// Closes a set.
pub const SET_CLOSE: u8 = b'$';
/// Opens a dictionary.
pub const DICT_OPEN: u8 = b'{';
/// Closes a dictionary.
pub const DICT_CLOSE: u8 = b'}';
/// Opens a record.
pub const RECORD_OPEN: u8 = b'<';
/// Closes a record.
pub const RECORD_CLOSE: u8 = b'>';
