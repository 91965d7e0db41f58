// SPDX-License-Identifier: Apache-2.0

//! Crate-wide error types.
//!
//! These stay dependency-free (`core::fmt` only) so the `no_std` core never
//! needs `thiserror`; under the `std` feature they also implement
//! `std::error::Error`.

use alloc::string::String;
use core::fmt;

/// The specific canonicity violation a [`DecodeError`] reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NonCanonical {
    /// A dictionary key did not sort strictly after the previous key.
    UnorderedKey,
    /// A set member did not sort strictly after the previous member.
    UnorderedMember,
    /// Two dictionary entries encoded to the same key bytes.
    DuplicateKey,
    /// Two set members encoded to the same bytes.
    DuplicateMember,
}

impl fmt::Display for NonCanonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::UnorderedKey => "dictionary key out of canonical order",
            Self::UnorderedMember => "set member out of canonical order",
            Self::DuplicateKey => "duplicate dictionary key",
            Self::DuplicateMember => "duplicate set member",
        };
        f.write_str(s)
    }
}

/// Every way decoding a Syrup value can fail.
///
/// Each variant carries the byte offset into the input where the violation
/// was detected, for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended before a value was fully read.
    Truncated,
    /// A byte appeared where a marker or digit was required.
    InvalidByte(usize),
    /// An integer magnitude exceeded the host's fixed-width integer range.
    ///
    /// This codec stores integers as arbitrary-precision decimal digit
    /// strings, so this variant is never raised by [`crate::de::decode`];
    /// it exists for callers that convert into a fixed-width type.
    OverflowInteger,
    /// An integer magnitude or length prefix had a leading zero.
    LeadingZero(usize),
    /// A dictionary or set violated canonical ordering.
    NonCanonical(NonCanonical, usize),
    /// A string payload requested UTF-8 validation and was not valid UTF-8.
    InvalidUtf8(usize),
    /// The arena ran out of room.
    AllocationFailed,
    /// Nesting of lists/sets/dictionaries/records exceeded the decoder's
    /// recursion limit.
    TooDeep,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => write!(f, "truncated input"),
            Self::InvalidByte(at) => write!(f, "invalid byte at offset {}", at),
            Self::OverflowInteger => write!(f, "integer magnitude overflowed"),
            Self::LeadingZero(at) => write!(f, "leading zero at offset {}", at),
            Self::NonCanonical(kind, at) => write!(f, "{} at offset {}", kind, at),
            Self::InvalidUtf8(at) => write!(f, "invalid utf-8 at offset {}", at),
            Self::AllocationFailed => write!(f, "arena allocation failed"),
            Self::TooDeep => write!(f, "nesting exceeded the recursion limit"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Every way encoding a Syrup value can fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The caller-supplied output buffer was too small to hold the result.
    BufferTooSmall,
    /// A `Set`/`Dictionary` of unknown provenance (not built through
    /// [`crate::canonical::canonicalize`]) was out of canonical order or
    /// contained a duplicate.
    NonCanonical(NonCanonical),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "output buffer too small"),
            Self::NonCanonical(kind) => write!(f, "{}", kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// A schema-shape mismatch discovered while deserializing into a concrete
/// Rust type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaMismatch {
    /// The value kind the target type required.
    pub expected: String,
    /// The value kind actually present on the wire.
    pub actual: String,
    /// A dotted/bracketed path to the mismatched field, root is empty.
    pub path: String,
}

impl fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} but found {} at '{}'",
            self.expected, self.actual, self.path
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SchemaMismatch {}
