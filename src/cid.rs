// SPDX-License-Identifier: Apache-2.0

//! Content identifiers: a SHA-256 digest over a value's canonical
//! encoding.

use sha2::{Digest, Sha256};

use crate::io::Write;
use crate::value::Value;

/// A 32-byte SHA-256 digest of `value`'s canonical encoding.
///
/// The caller is responsible for having already canonicalized `value`
/// (see [`crate::canonical::canonicalize`]) if it was built from
/// unordered dictionary/set data — two values that differ only in
/// dictionary/set member order encode to different bytes and therefore
/// hash differently.
pub fn cid(value: &Value<'_>) -> [u8; 32] {
    let mut hasher = HashWriter(Sha256::new());
    // Writing through our own `Write` impl is infallible, so encoding
    // straight into the hasher never fails.
    crate::ser::write_value(value, &mut hasher).unwrap_or(());
    hasher.0.finalize().into()
}

struct HashWriter(Sha256);

impl Write for HashWriter {
    type Error = core::convert::Infallible;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.update(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
