// File:    keygen.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Random key material generation for the cipher families.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Random key material for the cipher families.
//!
//! A convenience for callers, not a security feature: a generated key is
//! as breakable as any other key for these ciphers.

use std::num::NonZeroUsize;

use rand::Rng;

use crate::alphabet;
use crate::key::HillKey;
use crate::modmath;

/// Picks a Caesar shift uniformly from `[1, 25]`, skipping the identity
/// shift.
#[must_use]
pub fn random_shift() -> i64 {
    rand::rng().random_range(1..alphabet::LEN as i64)
}

/// Builds a key phrase of `len` uniformly random uppercase letters.
#[must_use]
pub fn random_phrase(len: NonZeroUsize) -> String {
    let mut rng = rand::rng();
    (0..len.get())
        .map(|_| alphabet::letter(rng.random_range(0..alphabet::LEN)))
        .collect()
}

/// Samples 2x2 matrices with entries in `[0, 26)` until one is invertible
/// modulo 26, so the result is always usable for decryption.
#[must_use]
pub fn random_matrix() -> HillKey {
    let mut rng = rand::rng();
    loop {
        let rows = [
            [
                rng.random_range(0..modmath::MODULUS),
                rng.random_range(0..modmath::MODULUS),
            ],
            [
                rng.random_range(0..modmath::MODULUS),
                rng.random_range(0..modmath::MODULUS),
            ],
        ];
        if modmath::invert(&rows).is_some() {
            return HillKey::new(rows);
        }
    }
}
