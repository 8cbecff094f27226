//! Tagged cipher keys.
//!
//! Replaces the "key is sometimes an int, sometimes a string, sometimes a
//! matrix" convention with an explicit sum type. The variant selects the
//! cipher family, so a key can only ever be used with the cipher it was
//! built for, and matrix shape is validated when the key is constructed
//! rather than when it is used.

use serde::{Deserialize, Serialize};

use crate::error::CipherError;
use crate::{atbash, caesar, hill, playfair, vigenere};

/// A validated 2x2 Hill key matrix, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HillKey([[i64; 2]; 2]);

impl HillKey {
    /// Wraps a matrix whose shape is already guaranteed by its type.
    #[must_use]
    pub const fn new(rows: [[i64; 2]; 2]) -> Self {
        Self(rows)
    }

    /// Builds a key from caller-supplied rows of arbitrary shape, as
    /// parsed out of raw user text.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyShape`] unless `rows` is exactly
    /// two rows of two entries each.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, CipherError> {
        match rows {
            [a, b] if a.len() == 2 && b.len() == 2 => Ok(Self::new([[a[0], a[1]], [b[0], b[1]]])),
            _ => Err(CipherError::InvalidKeyShape),
        }
    }

    /// The matrix entries, row-major.
    #[must_use]
    pub const fn rows(&self) -> &[[i64; 2]; 2] {
        &self.0
    }
}

/// Key material for one cipher family.
///
/// The variant selects the family; the payload is the family's key shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherKey {
    /// Caesar shift of any sign and magnitude.
    Shift(i64),
    /// Vigenère key phrase; must contain at least one letter.
    Vigenere(String),
    /// Atbash runs keyless.
    Atbash,
    /// Playfair key phrase; a phrase without letters falls back to "KEY".
    Playfair(String),
    /// Hill 2x2 key matrix.
    Hill(HillKey),
}

impl CipherKey {
    /// Encrypts `text` with the cipher family this key selects.
    ///
    /// # Errors
    ///
    /// Propagates the selected family's key-validation errors; see
    /// [`CipherError`].
    pub fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        match self {
            Self::Shift(shift) => Ok(caesar::encrypt(text, *shift)),
            Self::Vigenere(key) => vigenere::encrypt(text, key),
            Self::Atbash => Ok(atbash::encrypt(text)),
            Self::Playfair(key) => playfair::encrypt(text, key),
            Self::Hill(key) => Ok(hill::encrypt(text, key)),
        }
    }

    /// Decrypts `text` with the cipher family this key selects.
    ///
    /// # Errors
    ///
    /// Propagates the selected family's key-validation errors, including
    /// [`CipherError::NonInvertibleKey`] for a singular Hill matrix.
    pub fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        match self {
            Self::Shift(shift) => Ok(caesar::decrypt(text, *shift)),
            Self::Vigenere(key) => vigenere::decrypt(text, key),
            Self::Atbash => Ok(atbash::decrypt(text)),
            Self::Playfair(key) => playfair::decrypt(text, key),
            Self::Hill(key) => hill::decrypt(text, key),
        }
    }
}
