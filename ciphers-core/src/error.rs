//! Error types for the cipher library.

use thiserror::Error;

/// Errors produced by the cipher library.
///
/// Key-validation failures are reported before any transformed output is
/// produced, and every message is phrased to be shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key contains no usable alphabetic character.
    #[error("key must contain at least one letter")]
    InvalidKey,
    /// The Hill key is not a 2x2 matrix.
    #[error("key matrix must be 2x2")]
    InvalidKeyShape,
    /// The Hill key's determinant shares a factor with 26, so no inverse
    /// matrix exists and the ciphertext cannot be reversed.
    #[error("matrix not invertible modulo 26")]
    NonInvertibleKey,
    /// A letter could not be located in the Playfair key square. Cannot
    /// occur for any of the 25 square letters under a square built by
    /// this crate.
    #[error("character '{0}' not found in the key square")]
    CharacterNotFound(char),
}
