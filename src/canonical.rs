// SPDX-License-Identifier: Apache-2.0

//! Canonical ordering, equality and hashing over [`Value`].
//!
//! The canonical order is defined to be the lexicographic byte order of
//! each value's encoding, so the simplest correct implementation is to
//! encode both sides and compare bytes. [`compare`] does exactly that for
//! the cases where a cheaper structural shortcut isn't obviously safe, and
//! takes the cheaper path (comparing [`crate::value::Integer`] digit
//! strings, or recursing field-by-field) only where that is provably the
//! same order.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::ser::encode_to_vec;
use crate::value::Value;

/// Compares two values in wire byte order.
///
/// This is a total order: every pair of values, including ones of
/// different kinds, compares as strictly less, equal, or greater.
pub fn compare(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    use Value::*;
    match (a, b) {
        (Integer(x), Integer(y)) => x.cmp(y),
        // `f` (0x66) sorts below `t` (0x74), the same order as `bool`'s.
        (Boolean(x), Boolean(y)) => x.cmp(y),
        // List/Set/Dictionary/Record encodings are concatenations with no
        // length prefix of their own, so a naive "shorter sorts first"
        // tiebreak on element count is wrong whenever the longer side's
        // next element starts with a byte below the closing marker (e.g.
        // `#`, `<`, `[` all sort below `]`). Comparing the full encodings
        // is the only way to get this right for every shape.
        _ => encode_to_vec(a).cmp(&encode_to_vec(b)),
    }
}

/// Structural equality, consistent with [`compare`] and [`hash`].
pub fn equals(a: &Value<'_>, b: &Value<'_>) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Hashes a value consistently with [`equals`]: equal values under
/// [`equals`] always hash the same, by hashing each value's canonical
/// encoding.
pub fn hash<H: core::hash::Hasher>(value: &Value<'_>, state: &mut H) {
    core::hash::Hash::hash(&encode_to_vec(value), state);
}

/// Recursively sorts every [`Value::Set`] and [`Value::Dictionary`] into
/// canonical order and drops later duplicates, so the result is safe to
/// pass to [`crate::ser::encode_into`] or decode back without a
/// canonicity violation.
pub fn canonicalize(value: &mut Value<'_>) {
    match value {
        Value::List(items) => items.iter_mut().for_each(canonicalize),
        Value::Set(items) => {
            items.iter_mut().for_each(canonicalize);
            items.sort_by(compare);
            dedup_by_wire_bytes(items, |v| encode_to_vec(v));
        }
        Value::Dictionary(entries) => {
            entries.iter_mut().for_each(|(k, v)| {
                canonicalize(k);
                canonicalize(v);
            });
            entries.sort_by(|(ak, _), (bk, _)| compare(ak, bk));
            dedup_by_wire_bytes(entries, |(k, _)| encode_to_vec(k));
        }
        Value::Record { label, fields } => {
            canonicalize(label);
            fields.iter_mut().for_each(canonicalize);
        }
        _ => {}
    }
}

/// Keeps only the last entry among neighboring runs of equal wire bytes
/// (the list must already be sorted by that same key).
fn dedup_by_wire_bytes<T>(items: &mut Vec<T>, key: impl Fn(&T) -> Vec<u8>) {
    let mut write = 0;
    let mut read = 0;
    while read < items.len() {
        let mut last_of_run = read;
        while last_of_run + 1 < items.len() && key(&items[last_of_run + 1]) == key(&items[read]) {
            last_of_run += 1;
        }
        items.swap(write, last_of_run);
        write += 1;
        read = last_of_run + 1;
    }
    items.truncate(write);
}
