// File:    vigenere.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The Vigenère polyalphabetic cipher with a letter-gated key cursor.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Vigenère polyalphabetic cipher.
//!
//! The key phrase is reduced to its alphabetic characters; each input
//! letter is shifted by the alphabet position of the next key letter. The
//! key cursor advances only past alphabetic input characters, so digits
//! and punctuation neither consume key material nor move position.

use crate::alphabet;
use crate::error::CipherError;

/// Encrypts `text` under the key phrase `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`], before producing any output, when
/// `key` contains no alphabetic character.
pub fn encrypt(text: &str, key: &str) -> Result<String, CipherError> {
    transform(text, key, false)
}

/// Decrypts `text` under the key phrase `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`], before producing any output, when
/// `key` contains no alphabetic character.
pub fn decrypt(text: &str, key: &str) -> Result<String, CipherError> {
    transform(text, key, true)
}

fn key_shifts(key: &str) -> Result<Vec<usize>, CipherError> {
    let shifts: Vec<usize> = key.chars().filter_map(alphabet::position).collect();
    if shifts.is_empty() {
        return Err(CipherError::InvalidKey);
    }
    Ok(shifts)
}

fn transform(text: &str, key: &str, invert: bool) -> Result<String, CipherError> {
    let shifts = key_shifts(key)?;
    let mut cursor = 0_usize;
    let out = text
        .chars()
        .map(|ch| match alphabet::position(ch) {
            Some(index) => {
                let shift = shifts[cursor % shifts.len()];
                cursor += 1;
                let offset = if invert { alphabet::LEN - shift } else { shift };
                alphabet::match_case(alphabet::letter(index + offset), ch)
            }
            None => ch,
        })
        .collect();
    Ok(out)
}
