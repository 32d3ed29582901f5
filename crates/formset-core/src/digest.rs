//! # Schema Fingerprint
//!
//! A [`SchemaDigest`] is the SHA-256 of a schema's canonical JSON. Hosts
//! that reload form configuration compare fingerprints to learn whether
//! anything changed, without walking both structures.

use std::fmt::{self, Write as _};

use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// SHA-256 fingerprint of canonical bytes, rendered as `sha256:<hex>`.
///
/// Built only from [`CanonicalBytes`], so two documents that differ in key
/// order or whitespace share a fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaDigest([u8; 32]);

impl SchemaDigest {
    /// Fingerprint `canonical`.
    pub fn of(canonical: &CanonicalBytes) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let mut out = [0u8; 32];
        out.copy_from_slice(hasher.finalize().as_slice());
        Self(out)
    }

    /// Lowercase hex, without the algorithm prefix.
    pub fn to_hex(&self) -> String {
        self.0.iter().fold(String::with_capacity(64), |mut hex, byte| {
            // Writing to a String cannot fail.
            let _ = write!(hex, "{byte:02x}");
            hex
        })
    }
}

impl fmt::Display for SchemaDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}
