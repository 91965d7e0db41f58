// SPDX-License-Identifier: Apache-2.0

//! Zero-copy decoding of [`crate::value::Value`] trees.
//!
//! Decoding enforces canonicity as it goes: a dictionary key or set member
//! that doesn't sort strictly after the previous one is rejected, rather
//! than accepted and silently re-sorted. Strings, symbols and bytes
//! borrow their payload straight out of the input buffer, so the
//! returned [`crate::value::Value`] cannot outlive it.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::basic::{scan_header, Header, DICT_CLOSE, LIST_CLOSE, RECORD_CLOSE, SET_CLOSE};
use crate::error::{DecodeError, NonCanonical};
use crate::value::{Float, Integer, Value};

/// How a decoded `String`/`Symbol` payload is validated against UTF-8.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Utf8Policy {
    /// Invalid UTF-8 is a decode error.
    Strict,
    /// Invalid UTF-8 is replaced (lossily, which forces an owned copy for
    /// that one payload) rather than rejected.
    Opaque,
}

/// Recursion depth ciborium itself guards against stack overflow with; we
/// carry the same limit forward since nothing about the wire format makes
/// deeply nested input any less of a DoS vector here.
const MAX_DEPTH: usize = 128;

/// Decodes one value from the front of `input`, returning it along with
/// whatever bytes followed it.
pub fn decode(input: &[u8]) -> Result<(Value<'_>, &[u8]), DecodeError> {
    decode_with_policy(input, Utf8Policy::Strict)
}

/// Like [`decode`], with an explicit [`Utf8Policy`].
pub fn decode_with_policy(
    input: &[u8],
    policy: Utf8Policy,
) -> Result<(Value<'_>, &[u8]), DecodeError> {
    let mut cursor = Cursor {
        input,
        pos: 0,
        policy,
    };
    match cursor.value(0) {
        Ok(value) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(bytes = cursor.pos, "decoded a value");
            Ok((value, &input[cursor.pos..]))
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %e, offset = cursor.pos, "decode failed");
            Err(e)
        }
    }
}

struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    policy: Utf8Policy,
}

impl<'a> Cursor<'a> {
    fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    fn offset(&self, err: DecodeError) -> DecodeError {
        match err {
            DecodeError::InvalidByte(at) => DecodeError::InvalidByte(self.pos + at),
            DecodeError::LeadingZero(at) => DecodeError::LeadingZero(self.pos + at),
            other => other,
        }
    }

    fn header(&mut self) -> Result<Header, DecodeError> {
        let (header, len) = scan_header(self.remaining()).map_err(|e| self.offset(e))?;
        self.pos += len;
        Ok(header)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let start = self.pos;
        let end = start.checked_add(len).ok_or(DecodeError::OverflowInteger)?;
        if end > self.input.len() {
            return Err(DecodeError::Truncated);
        }
        self.pos = end;
        Ok(&self.input[start..end])
    }

    fn text(&mut self, start: usize, bytes: &'a [u8]) -> Result<Cow<'a, str>, DecodeError> {
        match core::str::from_utf8(bytes) {
            Ok(s) => Ok(Cow::Borrowed(s)),
            Err(_) if self.policy == Utf8Policy::Opaque => {
                Ok(Cow::Owned(String::from_utf8_lossy(bytes).into_owned()))
            }
            Err(_) => Err(DecodeError::InvalidUtf8(start)),
        }
    }

    fn value(&mut self, depth: usize) -> Result<Value<'a>, DecodeError> {
        if depth > MAX_DEPTH {
            return Err(DecodeError::TooDeep);
        }

        let start = self.pos;
        let header = self.header()?;
        match header {
            Header::Bool(b) => Ok(Value::Boolean(b)),
            Header::Float(bits) => Ok(Value::Float(Float::from_bits(bits))),
            Header::Integer { negative, digits } => {
                let digit_bytes = &self.input[start..start + digits];
                Ok(Value::Integer(Integer::from_digits(negative, digit_bytes)))
            }
            Header::Bytes(len) => {
                let bytes = self.take(len)?;
                Ok(Value::Bytes(Cow::Borrowed(bytes)))
            }
            Header::Text(len) => {
                let text_start = self.pos;
                let bytes = self.take(len)?;
                Ok(Value::String(self.text(text_start, bytes)?))
            }
            Header::Symbol(len) => {
                let text_start = self.pos;
                let bytes = self.take(len)?;
                Ok(Value::Symbol(self.text(text_start, bytes)?))
            }
            Header::ListOpen => {
                let items = self.sequence(depth, LIST_CLOSE)?;
                Ok(Value::List(items))
            }
            Header::SetOpen => {
                let items = self.canonical_sequence(depth, SET_CLOSE)?;
                Ok(Value::Set(items))
            }
            Header::DictOpen => {
                let entries = self.dictionary(depth)?;
                Ok(Value::Dictionary(entries))
            }
            Header::RecordOpen => {
                let label = Box::new(self.value(depth + 1)?);
                let fields = self.sequence(depth, RECORD_CLOSE)?;
                Ok(Value::Record { label, fields })
            }
            Header::ListClose | Header::SetClose | Header::DictClose | Header::RecordClose => {
                Err(DecodeError::InvalidByte(start))
            }
        }
    }

    fn peek_closer(&self, closer: u8) -> bool {
        self.remaining().first() == Some(&closer)
    }

    fn sequence(&mut self, depth: usize, closer: u8) -> Result<Vec<Value<'a>>, DecodeError> {
        let mut items = Vec::new();
        while !self.peek_closer(closer) {
            items.push(self.value(depth + 1)?);
        }
        self.header()?; // consume the closer
        Ok(items)
    }

    /// Like [`Self::sequence`], but enforces that each member's wire bytes
    /// sort strictly after the previous member's.
    fn canonical_sequence(
        &mut self,
        depth: usize,
        closer: u8,
    ) -> Result<Vec<Value<'a>>, DecodeError> {
        let mut items = Vec::new();
        let mut previous: Option<&'a [u8]> = None;
        while !self.peek_closer(closer) {
            let member_start = self.pos;
            let value = self.value(depth + 1)?;
            let member_bytes = &self.input[member_start..self.pos];
            if let Some(prev) = previous {
                match member_bytes.cmp(prev) {
                    core::cmp::Ordering::Equal => {
                        return Err(DecodeError::NonCanonical(
                            NonCanonical::DuplicateMember,
                            member_start,
                        ))
                    }
                    core::cmp::Ordering::Less => {
                        return Err(DecodeError::NonCanonical(
                            NonCanonical::UnorderedMember,
                            member_start,
                        ))
                    }
                    core::cmp::Ordering::Greater => {}
                }
            }
            previous = Some(member_bytes);
            items.push(value);
        }
        self.header()?;
        Ok(items)
    }

    fn dictionary(
        &mut self,
        depth: usize,
    ) -> Result<Vec<(Value<'a>, Value<'a>)>, DecodeError> {
        let mut entries = Vec::new();
        let mut previous: Option<&'a [u8]> = None;
        while !self.peek_closer(DICT_CLOSE) {
            let key_start = self.pos;
            let key = self.value(depth + 1)?;
            let key_bytes = &self.input[key_start..self.pos];
            if let Some(prev) = previous {
                match key_bytes.cmp(prev) {
                    core::cmp::Ordering::Equal => {
                        return Err(DecodeError::NonCanonical(
                            NonCanonical::DuplicateKey,
                            key_start,
                        ))
                    }
                    core::cmp::Ordering::Less => {
                        return Err(DecodeError::NonCanonical(
                            NonCanonical::UnorderedKey,
                            key_start,
                        ))
                    }
                    core::cmp::Ordering::Greater => {}
                }
            }
            previous = Some(key_bytes);
            let value = self.value(depth + 1)?;
            entries.push((key, value));
        }
        self.header()?;
        Ok(entries)
    }
}
