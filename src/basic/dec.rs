// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::error::DecodeError;

/// Scans one item's header from the front of `input`.
///
/// Returns the decoded [`Header`] and the number of bytes it occupied
/// (prefix digits plus marker, but not any payload). Digit accumulation
/// rejects leading zeros (other than the literal `0`) per the wire format.
pub fn scan_header(input: &[u8]) -> Result<(Header, usize), DecodeError> {
    let b0 = *input.first().ok_or(DecodeError::Truncated)?;

    match b0 {
        TRUE => Ok((Header::Bool(true), 1)),
        FALSE => Ok((Header::Bool(false), 1)),
        FLOAT => {
            let bits = input.get(1..9).ok_or(DecodeError::Truncated)?;
            let mut buf = [0u8; 8];
            buf.copy_from_slice(bits);
            Ok((Header::Float(u64::from_be_bytes(buf)), 9))
        }
        LIST_OPEN => Ok((Header::ListOpen, 1)),
        LIST_CLOSE => Ok((Header::ListClose, 1)),
        SET_OPEN => Ok((Header::SetOpen, 1)),
        SET_CLOSE => Ok((Header::SetClose, 1)),
        DICT_OPEN => Ok((Header::DictOpen, 1)),
        DICT_CLOSE => Ok((Header::DictClose, 1)),
        RECORD_OPEN => Ok((Header::RecordOpen, 1)),
        RECORD_CLOSE => Ok((Header::RecordClose, 1)),
        b'0'..=b'9' => scan_prefixed(input),
        _ => Err(DecodeError::InvalidByte(0)),
    }
}

/// Accumulates a digit+terminator prefix (integer magnitude or a
/// length-prefixed payload marker) and dispatches on the terminator byte.
fn scan_prefixed(input: &[u8]) -> Result<(Header, usize), DecodeError> {
    let mut i = 0;
    while let Some(&b) = input.get(i) {
        if b.is_ascii_digit() {
            i += 1;
            continue;
        }
        break;
    }

    let digits = &input[..i];
    let terminator = *input.get(i).ok_or(DecodeError::Truncated)?;

    if digits.len() > 1 && digits[0] == b'0' {
        return Err(DecodeError::LeadingZero(0));
    }

    let consumed = i + 1;
    match terminator {
        PLUS => Ok((
            Header::Integer {
                negative: false,
                digits: digits.len(),
            },
            consumed,
        )),
        MINUS => Ok((
            Header::Integer {
                negative: true,
                digits: digits.len(),
            },
            consumed,
        )),
        BYTES | TEXT | SYMBOL => {
            let len = parse_len(digits)?;
            let header = match terminator {
                BYTES => Header::Bytes(len),
                TEXT => Header::Text(len),
                _ => Header::Symbol(len),
            };
            Ok((header, consumed))
        }
        _ => Err(DecodeError::InvalidByte(i)),
    }
}

fn parse_len(digits: &[u8]) -> Result<usize, DecodeError> {
    if digits.is_empty() {
        return Err(DecodeError::InvalidByte(0));
    }
    let mut value: usize = 0;
    for &b in digits {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as usize))
            .ok_or(DecodeError::OverflowInteger)?;
    }
    Ok(value)
}

/// Parses an arbitrary-length run of ASCII decimal digits into its `u128`
/// value, used by the general integer path when the magnitude fits. Larger
/// magnitudes stay as raw digit bytes in [`crate::value::Integer`].
pub fn digits_to_u128(digits: &[u8]) -> Option<u128> {
    let mut value: u128 = 0;
    for &b in digits {
        value = value.checked_mul(10)?.checked_add((b - b'0') as u128)?;
    }
    Some(value)
}
