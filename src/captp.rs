// SPDX-License-Identifier: Apache-2.0

//! CapTP-oriented fast paths.
//!
//! Syrup is general-purpose, but its most common caller is CapTP, whose
//! messages are small, highly repetitive records (`op:deliver`,
//! `desc:export`, sequence numbers as plain integers, …). The functions
//! here take shortcuts specialized to that shape; each one is checked
//! against the general [`crate::ser`]/[`crate::de`] path in tests rather
//! than trusted on its own.

use core::convert::TryFrom;

use crate::basic::{scan_header, write_decimal, Header, PLUS, RECORD_CLOSE, RECORD_OPEN, SYMBOL};
use crate::error::{DecodeError, EncodeError};

/// The wire symbol used for CapTP's `desc:export` descriptor record.
const DESC_EXPORT: &[u8] = b"desc:export";

/// Encodes the common `<desc:export N>` record directly into `buf`,
/// skipping the general `Value` construction and dispatch in
/// [`crate::ser::encode_into`].
///
/// The wire bytes produced are identical to encoding
/// `Value::Record { label: Value::Symbol("desc:export"), fields: vec![Value::Integer(position.into())] }`.
pub fn captp_encode_desc_export(position: u64, buf: &mut [u8]) -> Result<&[u8], EncodeError> {
    let mut pos = 0;
    let mut put = |bytes: &[u8], buf: &mut [u8]| -> Result<(), EncodeError> {
        let end = pos + bytes.len();
        buf.get_mut(pos..end)
            .ok_or(EncodeError::BufferTooSmall)?
            .copy_from_slice(bytes);
        pos = end;
        Ok(())
    };

    put(&[RECORD_OPEN], buf)?;

    let mut len_digits = [0u8; 8];
    let n = write_decimal(DESC_EXPORT.len() as u128, &mut len_digits)
        .ok_or(EncodeError::BufferTooSmall)?;
    put(&len_digits[..n], buf)?;
    put(&[SYMBOL], buf)?;
    put(DESC_EXPORT, buf)?;

    let mut digits = [0u8; 20];
    let n = write_decimal(position as u128, &mut digits).ok_or(EncodeError::BufferTooSmall)?;
    put(&digits[..n], buf)?;
    put(&[PLUS], buf)?;

    put(&[RECORD_CLOSE], buf)?;
    Ok(&buf[..pos])
}

/// Parses a plain integer token (`digit+ sign`) directly into a `u64`,
/// without constructing a [`crate::value::Integer`].
///
/// Returns the parsed value and the number of input bytes it occupied.
/// Falls through to `None` — rather than erroring — for anything the
/// fast path doesn't handle (negative values, magnitudes that overflow
/// `u64`, or malformed input); callers should retry through
/// [`crate::de::decode`] in that case, which will either decode the value
/// through the general path or report the precise error.
pub fn parse_decimal_fast(input: &[u8]) -> Option<(u64, usize)> {
    let mut i = 0;
    while matches!(input.get(i), Some(b) if b.is_ascii_digit()) {
        i += 1;
    }
    if i == 0 || (i > 1 && input[0] == b'0') {
        return None;
    }
    if *input.get(i)? != PLUS {
        return None;
    }

    let mut value: u64 = 0;
    for &b in &input[..i] {
        value = value.checked_mul(10)?.checked_add((b - b'0') as u64)?;
    }
    Some((value, i + 1))
}

/// Reads the wire symbol/string at the front of `message`, if it opens a
/// record (`<len'label...` or `<len"label...`), without allocating or
/// decoding the record's fields.
fn leading_label(message: &[u8]) -> Option<&[u8]> {
    let (header, consumed) = scan_header(message).ok()?;
    if header != Header::RecordOpen {
        return None;
    }
    let rest = &message[consumed..];
    let (header, consumed) = scan_header(rest).ok()?;
    let len = match header {
        Header::Symbol(len) | Header::Text(len) => len,
        _ => return None,
    };
    rest.get(consumed..consumed + len)
}

/// Rough upper bound, in bytes, on the arena space needed to decode
/// `message` as a CapTP envelope, keyed off its leading record label.
///
/// Named per the four message shapes CapTP actually sends at volume;
/// anything else gets a generous flat default. This is a heuristic for
/// [`crate::arena::Arena::with_capacity`], not a hard bound — decoding
/// still falls back to the global allocator if it runs short, so the
/// estimator must never under-claim relative to what a correct decode
/// needs, only waste a little space when it over-claims.
pub fn estimate_captp_arena(message: &[u8]) -> usize {
    const DELIVER: usize = 256;
    const DELIVER_ONLY: usize = 128;
    const LISTEN: usize = 64;
    const DEFAULT: usize = 512;

    match leading_label(message) {
        Some(b"op:deliver") => DELIVER,
        Some(b"op:deliver-only") => DELIVER_ONLY,
        Some(b"op:listen") => LISTEN,
        _ => DEFAULT,
    }
}

/// Decodes a plain positive integer, trying [`parse_decimal_fast`] first
/// and falling back to the general decoder.
pub fn decode_sequence_number(input: &[u8]) -> Result<(u64, usize), DecodeError> {
    if let Some(fast) = parse_decimal_fast(input) {
        return Ok(fast);
    }

    let (value, rest) = crate::de::decode(input)?;
    let consumed = input.len() - rest.len();
    match value {
        crate::value::Value::Integer(i) => {
            i.to_u128().and_then(|v| u64::try_from(v).ok())
        }
        _ => None,
    }
    .map(|v| (v, consumed))
    .ok_or(DecodeError::OverflowInteger)
}
