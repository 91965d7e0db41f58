// SPDX-License-Identifier: Apache-2.0

//! Minimal byte I/O traits.
//!
//! Syrup values are framed by explicit length/magnitude prefixes, so the
//! codec never needs buffered or seekable I/O — just "read exactly N bytes"
//! and "write all of these bytes". These traits let the core codec run in
//! `no_std`+`alloc` contexts as well as against `std::io`.

#[cfg(feature = "std")]
mod std;

#[cfg(not(feature = "std"))]
mod no_std;

/// Raised by the `no_std` slice reader when fewer bytes remain than requested.
#[cfg(not(feature = "std"))]
#[derive(Debug)]
pub struct EndOfInput(());

/// Raised by the `no_std` slice writer when the target buffer is full.
#[cfg(not(feature = "std"))]
#[derive(Debug)]
pub struct OutOfSpace(());

/// A source of bytes.
///
/// Blanket-implemented for `std::io::Read` under the `std` feature, and for
/// `&[u8]` otherwise.
pub trait Read {
    /// Error produced when the read cannot be satisfied.
    type Error;

    /// Reads exactly `data.len()` bytes or fails.
    fn read_exact(&mut self, data: &mut [u8]) -> Result<(), Self::Error>;
}

/// A sink for bytes.
///
/// Blanket-implemented for `std::io::Write` under the `std` feature, and
/// for `Vec<u8>` / `&mut [u8]` otherwise.
pub trait Write {
    /// Error produced when the write cannot be satisfied.
    type Error;

    /// Writes every byte of `data` or fails.
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flushes any buffered output.
    fn flush(&mut self) -> Result<(), Self::Error>;
}
