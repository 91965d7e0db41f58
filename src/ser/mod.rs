// SPDX-License-Identifier: Apache-2.0

//! Canonical encoding of [`crate::value::Value`] trees.
//!
//! Encoding never rewrites a [`Value::Dictionary`] or [`Value::Set`] into
//! canonical order itself — callers that build these from unordered data
//! should run [`crate::canonical::canonicalize`] first. This mirrors how
//! decoding enforces canonicity on the way in rather than silently fixing
//! it up. Since `Value::Set`/`Value::Dictionary` are plain public variants
//! with no smart constructor, every value handed to this module is of
//! unknown provenance, so both entry points verify canonical order and
//! uniqueness before writing a single byte, the same way [`crate::de`]
//! verifies it on the way in.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::basic::{
    write_decimal, BYTES, DICT_CLOSE, DICT_OPEN, FALSE, FLOAT, LIST_CLOSE, LIST_OPEN, MINUS, PLUS,
    RECORD_CLOSE, RECORD_OPEN, SET_CLOSE, SET_OPEN, SYMBOL, TEXT, TRUE,
};
use crate::canonical::compare;
use crate::error::{EncodeError, NonCanonical};
use crate::io::Write;
use crate::value::Value;

/// Encodes `value` into `buf`, returning the written prefix.
///
/// Fails with [`EncodeError::BufferTooSmall`] if `buf` cannot hold the
/// full encoding, or [`EncodeError::NonCanonical`] if a `Set`/`Dictionary`
/// anywhere in `value` is out of order or has a duplicate key/member.
pub fn encode_into<'buf>(
    value: &Value<'_>,
    buf: &'buf mut [u8],
) -> Result<&'buf [u8], EncodeError> {
    verify_canonical(value)?;
    let len = buf.len();
    let mut cursor = &mut buf[..];
    write_value(value, &mut cursor).map_err(|_| EncodeError::BufferTooSmall)?;
    let remaining = cursor.len();
    let written = len - remaining;
    #[cfg(feature = "tracing")]
    tracing::trace!(bytes = written, "encoded a value");
    Ok(&buf[..written])
}

/// Encodes `value` into a freshly allocated, exactly-sized buffer.
///
/// # Panics
///
/// Panics if a `Set`/`Dictionary` anywhere in `value` is out of order or
/// has a duplicate key/member; run [`crate::canonical::canonicalize`]
/// first if `value` wasn't already built in canonical order, or use
/// [`encode_into`] to handle the violation as an error instead.
pub fn encode_to_vec(value: &Value<'_>) -> Vec<u8> {
    verify_canonical(value).expect("value must already be in canonical order; see `canonicalize`");
    let mut out = Vec::new();
    // `Vec<u8>: Write` is infallible.
    write_value(value, &mut out).unwrap_or(());
    out
}

/// Checks that every `Set`/`Dictionary` in `value`, at every depth, is in
/// strict canonical order with no duplicate member/key.
fn verify_canonical(value: &Value<'_>) -> Result<(), EncodeError> {
    match value {
        Value::List(items) => items.iter().try_for_each(verify_canonical),
        Value::Set(items) => {
            items.iter().try_for_each(verify_canonical)?;
            check_strictly_increasing(items, |v| v, NonCanonical::UnorderedMember, NonCanonical::DuplicateMember)
        }
        Value::Dictionary(entries) => {
            entries
                .iter()
                .try_for_each(|(k, v)| verify_canonical(k).and_then(|_| verify_canonical(v)))?;
            check_strictly_increasing(
                entries,
                |(k, _)| k,
                NonCanonical::UnorderedKey,
                NonCanonical::DuplicateKey,
            )
        }
        Value::Record { label, fields } => {
            verify_canonical(label)?;
            fields.iter().try_for_each(verify_canonical)
        }
        _ => Ok(()),
    }
}

fn check_strictly_increasing<T>(
    items: &[T],
    key: impl Fn(&T) -> &Value<'_>,
    unordered: NonCanonical,
    duplicate: NonCanonical,
) -> Result<(), EncodeError> {
    for pair in items.windows(2) {
        match compare(key(&pair[0]), key(&pair[1])) {
            Ordering::Less => {}
            Ordering::Equal => return Err(EncodeError::NonCanonical(duplicate)),
            Ordering::Greater => return Err(EncodeError::NonCanonical(unordered)),
        }
    }
    Ok(())
}

fn write_marker<W: Write>(out: &mut W, byte: u8) -> Result<(), W::Error> {
    out.write_all(&[byte])
}

fn write_float<W: Write>(out: &mut W, bits: u64) -> Result<(), W::Error> {
    out.write_all(&[FLOAT])?;
    out.write_all(&bits.to_be_bytes())
}

fn write_prefix<W: Write>(out: &mut W, digits: &[u8], terminator: u8) -> Result<(), W::Error> {
    out.write_all(digits)?;
    out.write_all(&[terminator])
}

pub(crate) fn write_value<W: Write>(value: &Value<'_>, out: &mut W) -> Result<(), W::Error> {
    match value {
        Value::Boolean(true) => write_marker(out, TRUE),
        Value::Boolean(false) => write_marker(out, FALSE),
        Value::Integer(i) => write_prefix(out, i.digits(), if i.is_negative() { MINUS } else { PLUS }),
        Value::Float(f) => write_float(out, f.to_canonical_bits()),
        Value::String(s) => write_length_prefixed(out, s.as_bytes(), TEXT),
        Value::Symbol(s) => write_length_prefixed(out, s.as_bytes(), SYMBOL),
        Value::Bytes(b) => write_length_prefixed(out, b, BYTES),
        Value::List(items) => {
            write_marker(out, LIST_OPEN)?;
            for item in items {
                write_value(item, out)?;
            }
            write_marker(out, LIST_CLOSE)
        }
        Value::Set(items) => {
            write_marker(out, SET_OPEN)?;
            for item in items {
                write_value(item, out)?;
            }
            write_marker(out, SET_CLOSE)
        }
        Value::Dictionary(entries) => {
            write_marker(out, DICT_OPEN)?;
            for (k, v) in entries {
                write_value(k, out)?;
                write_value(v, out)?;
            }
            write_marker(out, DICT_CLOSE)
        }
        Value::Record { label, fields } => {
            write_marker(out, RECORD_OPEN)?;
            write_value(label, out)?;
            for field in fields {
                write_value(field, out)?;
            }
            write_marker(out, RECORD_CLOSE)
        }
    }
}

fn write_length_prefixed<W: Write>(out: &mut W, bytes: &[u8], terminator: u8) -> Result<(), W::Error> {
    let mut digits = [0u8; 20]; // u64::MAX has 20 decimal digits, len fits usize <= u64 on all targets we support
    let n = write_decimal(bytes.len() as u128, &mut digits)
        .expect("length fits in 20 decimal digits on any supported target");
    write_prefix(out, &digits[..n], terminator)?;
    out.write_all(bytes)
}
