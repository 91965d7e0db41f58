// SPDX-License-Identifier: Apache-2.0

//! A canonical codec for Syrup, the wire format used by OCapN/CapTP.
//!
//! This crate provides:
//!
//!   * Zero-copy encoding and decoding of [`value::Value`] trees
//!     (see the `basic`, `value`, `ser` and `de` modules)
//!   * Canonical ordering, equality and hashing over `Value` consistent
//!     with the dictionary/set sort order the format prescribes
//!     (see the `canonical` module)
//!   * Content identifiers over canonical encodings (see the `cid` module)
//!   * Serde-based conversion between `Value` and concrete Rust types
//!     (see the `schema` module)
//!   * A handful of CapTP-oriented fast paths (see the `captp` module)
//!
//! Feature flags:
//!
//!   * `serde` - enables the `schema` module's `serialize`/`deserialize` glue
//!   * `std`   - enables `std::error::Error` impls and std I/O adapters
//!   * `tracing` - enables diagnostic spans/events during decode

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(clippy::all)]
#![deny(missing_docs)]
#![deny(clippy::cargo)]

extern crate alloc;

mod io;

pub mod arena;
pub mod basic;
pub mod canonical;
pub mod captp;
pub mod cid;
pub mod de;
pub mod error;
pub mod ser;
pub mod stream;
pub mod value;

#[cfg(feature = "serde")]
pub mod schema;

pub use cid::cid;
pub use de::decode;
pub use error::{DecodeError, EncodeError, NonCanonical, SchemaMismatch};
pub use ser::encode_into;
pub use stream::decode_streaming;
pub use value::Value;

#[cfg(feature = "serde")]
pub use schema::{deserialize, serialize};
