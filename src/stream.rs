// SPDX-License-Identifier: Apache-2.0

//! Decoding a sequence of concatenated top-level values, such as a stream
//! of CapTP messages read off a socket.

use core::fmt;

use crate::de::{decode_with_policy, Utf8Policy};
use crate::error::DecodeError;
use crate::io::Read;
use crate::value::Value;

/// Everything that can go wrong in [`read_value`]: either the underlying
/// [`Read`] failed, or the bytes it produced don't decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadError<E> {
    /// The reader itself returned an error before a full value arrived.
    Io(E),
    /// A full value's worth of bytes was read, but it didn't decode.
    Decode(DecodeError),
}

impl<E: fmt::Display> fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "read error: {}", e),
            Self::Decode(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: std::error::Error + 'static> std::error::Error for ReadError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Decode(e) => Some(e),
        }
    }
}

/// Reads one complete value from `reader` into `buf`, growing `buf` a byte
/// at a time until the accumulated bytes decode.
///
/// Syrup's prefixes are self-describing, but decoding is zero-copy over a
/// contiguous `&[u8]`, so there's no way to know a value's length ahead of
/// reading it without re-implementing the decoder's own logic; reading one
/// byte at a time and re-attempting the decode is the straightforward way
/// to bridge an arbitrary byte-at-a-time [`Read`] source (a socket, a pipe)
/// into that model. This trades a decode attempt per byte for not needing
/// a second, lookahead-capable I/O abstraction — fine for CapTP's small
/// messages, not a good fit for bulk transfer.
///
/// `buf` is cleared before reading starts; on success it holds exactly the
/// bytes of the decoded value, and the returned [`Value`] borrows from it.
pub fn read_value<'buf, R: Read>(
    mut reader: R,
    buf: &'buf mut alloc::vec::Vec<u8>,
) -> Result<Value<'buf>, ReadError<R::Error>> {
    buf.clear();
    let mut byte = [0u8; 1];
    loop {
        reader.read_exact(&mut byte).map_err(ReadError::Io)?;
        buf.push(byte[0]);
        match decode_with_policy(&buf[..], Utf8Policy::Strict) {
            Err(DecodeError::Truncated) => continue,
            Err(e) => return Err(ReadError::Decode(e)),
            Ok(_) => break,
        }
    }
    decode_with_policy(&buf[..], Utf8Policy::Strict)
        .map(|(value, _)| value)
        .map_err(ReadError::Decode)
}

/// Decodes values one at a time from the front of `input` until it is
/// exhausted.
///
/// Each call to [`StreamDecoder::next`] advances past exactly one value;
/// the decoder holds no state between calls beyond its position in
/// `input`, so callers may freely inspect or discard values as they come
/// out.
pub struct StreamDecoder<'a> {
    remaining: &'a [u8],
    policy: Utf8Policy,
}

/// Builds a [`StreamDecoder`] over `input` using strict UTF-8 validation.
pub fn decode_streaming(input: &[u8]) -> StreamDecoder<'_> {
    StreamDecoder {
        remaining: input,
        policy: Utf8Policy::Strict,
    }
}

impl<'a> StreamDecoder<'a> {
    /// Builds a [`StreamDecoder`] with an explicit [`Utf8Policy`].
    pub fn with_policy(input: &'a [u8], policy: Utf8Policy) -> Self {
        Self {
            remaining: input,
            policy,
        }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        self.remaining
    }

    /// Decodes and returns the next value, or `None` once the input is
    /// fully consumed.
    ///
    /// A trailing partial value is reported as
    /// `Some(Err(DecodeError::Truncated))` with [`Self::remaining`] left
    /// untouched, so a caller that appends more bytes to the same buffer
    /// and re-slices can call `next` again starting from the same
    /// position. Any other error means the bytes at the current position
    /// are malformed, not just incomplete, so the stream is parked at
    /// empty — retrying the same bytes could never succeed.
    pub fn next(&mut self) -> Option<Result<Value<'a>, DecodeError>> {
        if self.remaining.is_empty() {
            return None;
        }
        match decode_with_policy(self.remaining, self.policy) {
            Ok((value, rest)) => {
                self.remaining = rest;
                Some(Ok(value))
            }
            Err(DecodeError::Truncated) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(remaining = self.remaining.len(), "stream needs more input");
                Some(Err(DecodeError::Truncated))
            }
            Err(e) => {
                // Not just incomplete but malformed: don't retry forever.
                #[cfg(feature = "tracing")]
                tracing::debug!(remaining = self.remaining.len(), "stream decode aborted");
                self.remaining = &[];
                Some(Err(e))
            }
        }
    }
}

/// Iterating yields `Err(DecodeError::Truncated)` repeatedly without
/// progress if the underlying buffer never grows past a partial trailing
/// value; callers driving a live socket should use [`StreamDecoder::next`]
/// directly and stop pulling once they see `Truncated`, resuming only
/// after appending more bytes.
impl<'a> Iterator for StreamDecoder<'a> {
    type Item = Result<Value<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        StreamDecoder::next(self)
    }
}
