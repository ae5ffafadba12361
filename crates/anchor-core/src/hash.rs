//! Pure synchronous hashing for state-root commitments
//!
//! Hashing is a pure, deterministic operation and stays outside the effect
//! system. The trait design keeps a single source of truth for which
//! algorithm produces commitment digests.
//!
//! The algorithm is selected once at compile time via the `ALGORITHM`
//! constant. All code that calls [`hash`] picks up a change there without any
//! call-site edits.
//!
//! Current algorithm: **SHA-256** (32-byte output).

use sha2::{Digest, Sha256};
use std::fmt;

/// Synchronous trait for commitment hashing
///
/// Implementations must be deterministic: the same input always produces the
/// same 32-byte digest.
pub trait HashAlgorithm: Send + Sync + fmt::Debug {
    /// Hash arbitrary bytes to a 32-byte digest
    fn hash(&self, data: &[u8]) -> [u8; 32];
}

/// SHA-256 hash implementation (NIST FIPS 180-4)
#[derive(Debug, Clone, Copy)]
pub struct Sha256Algorithm;

impl HashAlgorithm for Sha256Algorithm {
    fn hash(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();
        let mut output = [0u8; 32];
        output.copy_from_slice(&result);
        output
    }
}

/// The global hash algorithm used for every commitment digest.
///
/// Single point where the algorithm is declared; change it here to change it
/// system-wide.
pub const ALGORITHM: Sha256Algorithm = Sha256Algorithm;

/// Convenience function for hashing with the global algorithm
pub fn hash(data: &[u8]) -> [u8; 32] {
    ALGORITHM.hash(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(hash(b"State_V1"), hash(b"State_V1"));
    }

    #[test]
    fn different_inputs_produce_different_digests() {
        assert_ne!(hash(b"State_V1"), hash(b"State_V2"));
    }
}
