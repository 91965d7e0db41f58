// SPDX-License-Identifier: Apache-2.0

//! The dispatched shape of one Syrup item's prefix.

/// One token's worth of framing information, with any variable-length
/// payload left unread — callers slice the payload themselves using the
/// carried length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Header {
    /// `t` / `f`.
    Bool(bool),
    /// Magnitude sign and byte-length of the decimal digits that precede
    /// this token (the digits themselves are the bytes just scanned).
    Integer {
        /// `true` for a `-` sign byte, `false` for `+`.
        negative: bool,
        /// Byte length of the digit run preceding the sign.
        digits: usize,
    },
    /// `D` followed by 8 big-endian bytes, already assembled into bits.
    Float(u64),
    /// `<len>:`, length in bytes.
    Bytes(usize),
    /// `<len>"`, length in bytes (not code points).
    Text(usize),
    /// `<len>'`, length in bytes.
    Symbol(usize),
    /// `[`
    ListOpen,
    /// `]`
    ListClose,
    /// `#`
    SetOpen,
    /// `$`
    SetClose,
    /// `{`
    DictOpen,
    /// `}`
    DictClose,
    /// `<`
    RecordOpen,
    /// `>`
    RecordClose,
}
