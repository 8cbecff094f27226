// File:    caesar.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The Caesar shift cipher, preserving case and non-alphabetic characters.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Caesar shift cipher.

use crate::alphabet;

/// Shifts every letter of `text` forward by `shift` places, wrapping at
/// the end of the alphabet. Letters keep their case and all other
/// characters pass through unchanged in place. Any integer shift is
/// accepted and reduced modulo 26.
#[must_use]
pub fn encrypt(text: &str, shift: i64) -> String {
    substitute(text, alphabet::reduce_shift(shift))
}

/// Inverse of [`encrypt`] for the same `shift`.
#[must_use]
pub fn decrypt(text: &str, shift: i64) -> String {
    substitute(text, alphabet::LEN - alphabet::reduce_shift(shift))
}

fn substitute(text: &str, offset: usize) -> String {
    text.chars()
        .map(|ch| match alphabet::position(ch) {
            Some(index) => alphabet::match_case(alphabet::letter(index + offset), ch),
            None => ch,
        })
        .collect()
}
