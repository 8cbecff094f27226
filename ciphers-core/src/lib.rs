// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The main library crate for ciphers-core, collecting the classical cipher families and their shared alphabet model.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Classical Cipher Library
//!
//! Pure-function implementations of five classical cipher families over the
//! 26-letter Latin alphabet: Caesar, Vigenère, Atbash, Playfair, and the
//! 2x2 Hill cipher. Every operation transforms a complete in-memory string
//! and keeps no state between calls, so all of them are safe to invoke
//! concurrently without coordination.
//!
//! These ciphers are historically broken and offer no confidentiality
//! against an informed adversary. The crate exists for the algorithms, not
//! for security.
//!
//! ```
//! use ciphers_core::caesar;
//!
//! let ciphertext = caesar::encrypt("Hello, World!", 3);
//! assert_eq!(ciphertext, "Khoor, Zruog!");
//! assert_eq!(caesar::decrypt(&ciphertext, 3), "Hello, World!");
//! ```

/// Shared alphabet model: letter/index lookup tables and case handling.
pub mod alphabet;
/// Keyless Atbash mirror substitution.
pub mod atbash;
/// Caesar shift cipher.
pub mod caesar;
/// Error taxonomy shared by all cipher families.
pub mod error;
/// Hill 2x2 matrix cipher.
pub mod hill;
/// Tagged cipher keys and family dispatch.
pub mod key;
/// Random key material generation.
pub mod keygen;
/// Modular arithmetic helpers for the Hill family.
pub mod modmath;
/// Playfair digram substitution over a 5x5 key square.
pub mod playfair;
/// Vigenère polyalphabetic cipher.
pub mod vigenere;
