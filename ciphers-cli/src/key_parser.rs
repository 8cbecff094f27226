//! Parses raw key text from the command line into typed cipher keys.
//!
//! Splitting `"3 3;2 5"` into a matrix (and friends) is deliberately the
//! driver's job; the core library only ever sees typed keys.

use ciphers_core::key::{CipherKey, HillKey};
use clap::ValueEnum;

/// The cipher families the driver can dispatch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Family {
    /// Integer-shift substitution
    Caesar,
    /// Key-phrase polyalphabetic substitution
    Vigenere,
    /// Keyless mirror substitution
    Atbash,
    /// 5x5 key-square digram substitution
    Playfair,
    /// 2x2 matrix cipher
    Hill,
}

impl Family {
    /// The family name as it appears on the command line.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Vigenere => "vigenere",
            Self::Atbash => "atbash",
            Self::Playfair => "playfair",
            Self::Hill => "hill",
        }
    }
}

/// Turns the raw `--key` text into the typed key for `family`.
pub(crate) fn parse_key(family: Family, raw: Option<&str>) -> Result<CipherKey, String> {
    match family {
        Family::Caesar => {
            let raw = raw.ok_or("the caesar cipher needs --key <SHIFT>")?;
            let shift = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid caesar shift '{raw}': expected an integer"))?;
            Ok(CipherKey::Shift(shift))
        }
        Family::Vigenere => {
            let raw = raw.ok_or("the vigenere cipher needs --key <PHRASE>")?;
            Ok(CipherKey::Vigenere(raw.to_owned()))
        }
        Family::Atbash => Ok(CipherKey::Atbash),
        Family::Playfair => Ok(CipherKey::Playfair(raw.unwrap_or_default().to_owned())),
        Family::Hill => {
            let raw = raw.ok_or("the hill cipher needs --key <MATRIX>, e.g. \"3 3;2 5\"")?;
            let rows = parse_matrix_rows(raw)?;
            let key = HillKey::from_rows(&rows).map_err(|e| e.to_string())?;
            Ok(CipherKey::Hill(key))
        }
    }
}

fn parse_matrix_rows(raw: &str) -> Result<Vec<Vec<i64>>, String> {
    raw.split(';')
        .map(|row| {
            row.split_whitespace()
                .map(|entry| {
                    entry
                        .parse::<i64>()
                        .map_err(|_| format!("invalid matrix entry '{entry}': expected an integer"))
                })
                .collect()
        })
        .collect()
}
