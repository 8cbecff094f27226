// File:    hill.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The Hill cipher for 2x2 integer key matrices over Z/26.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Hill 2x2 matrix cipher.
//!
//! Each pair of letter indices forms a column vector that is multiplied
//! by the key matrix modulo 26. Decryption multiplies by the inverse
//! matrix, which only exists when the key's determinant is coprime with
//! 26.

use crate::alphabet;
use crate::error::CipherError;
use crate::key::HillKey;
use crate::modmath;

/// Normalizes `text` for the Hill cipher: letters only, uppercased, and
/// padded with a trailing `'X'` to an even length.
#[must_use]
pub fn prepare(text: &str) -> String {
    let mut out: String = text
        .chars()
        .filter_map(alphabet::position)
        .map(alphabet::letter)
        .collect();
    if out.len() % 2 == 1 {
        out.push('X');
    }
    out
}

/// Encrypts `text` by multiplying each pair of letter indices with the
/// key matrix modulo 26.
#[must_use]
pub fn encrypt(text: &str, key: &HillKey) -> String {
    let matrix = modmath::reduce(key.rows());
    apply(&matrix, &prepare(text))
}

/// Decrypts ciphertext produced with the same key.
///
/// # Errors
///
/// Returns [`CipherError::NonInvertibleKey`] when the key's determinant
/// shares a factor with 26. An expected user-input condition, reported
/// as a value before any output is produced.
pub fn decrypt(text: &str, key: &HillKey) -> Result<String, CipherError> {
    let inverse = modmath::invert(key.rows()).ok_or(CipherError::NonInvertibleKey)?;
    Ok(apply(&inverse, &prepare(text)))
}

fn apply(matrix: &modmath::Mat2, prepared: &str) -> String {
    let indices: Vec<i64> = prepared
        .chars()
        .filter_map(alphabet::position)
        .map(|index| index as i64)
        .collect();
    let mut out = String::with_capacity(indices.len());
    for pair in indices.chunks_exact(2) {
        let [x, y] = modmath::mul_vec(matrix, [pair[0], pair[1]]);
        out.push(alphabet::letter(x as usize));
        out.push(alphabet::letter(y as usize));
    }
    out
}
