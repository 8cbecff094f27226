//! A command-line interface for the classical cipher library.

use std::error::Error;
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use ciphers_core::keygen;
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use serde::Serialize;

mod key_parser;

use crate::key_parser::Family;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Caesar-shift a message by 3\nciphers-cli encrypt caesar \"Hello, World!\" --key 3\n\n# Round-trip a file through the Playfair cipher\nciphers-cli encrypt playfair --input note.txt --output note.pf --key monarchy\nciphers-cli decrypt playfair --input note.pf --key monarchy\n\n# Hill cipher with a 2x2 matrix key\nciphers-cli encrypt hill \"SHORT MESSAGE\" --key \"3 3;2 5\"\n\n# Generate an invertible Hill key\nciphers-cli keygen hill"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message
    Encrypt(TransformArgs),
    /// Decrypt a message
    Decrypt(TransformArgs),
    /// Generate random key material for a cipher family
    Keygen {
        /// The cipher family to generate a key for
        cipher: Family,

        /// Length of the generated key phrase (vigenere and playfair)
        #[arg(short, long, default_value = "8")]
        length: NonZeroUsize,
    },
}

#[derive(Args)]
struct TransformArgs {
    /// The cipher family to use
    cipher: Family,

    /// The message text; required unless --input is given
    text: Option<String>,

    /// The key in the family's textual form: an integer shift, a key
    /// phrase, or an "a b;c d" matrix
    #[arg(short, long)]
    key: Option<String>,

    /// Read the message from a file instead of the command line
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print a JSON record instead of the bare result
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy)]
enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    fn name(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }
}

/// Machine-readable result record for `--json` output.
#[derive(Serialize)]
struct Outcome<'a> {
    cipher: &'a str,
    mode: &'a str,
    output: &'a str,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Encrypt(args) => transform(&args, Mode::Encrypt),
        Commands::Decrypt(args) => transform(&args, Mode::Decrypt),
        Commands::Keygen { cipher, length } => keygen_command(cipher, length),
    }
}

fn transform(args: &TransformArgs, mode: Mode) -> Result<(), Box<dyn Error>> {
    let key = key_parser::parse_key(args.cipher, args.key.as_deref())?;
    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display()))?,
        (None, None) => return Err("provide the message text or --input <FILE>".into()),
    };

    info!(
        "running {} with the {} cipher over {} characters",
        mode.name(),
        args.cipher.name(),
        text.chars().count()
    );
    let result = match mode {
        Mode::Encrypt => key.encrypt(&text)?,
        Mode::Decrypt => key.decrypt(&text)?,
    };

    let rendered = if args.json {
        serde_json::to_string_pretty(&Outcome {
            cipher: args.cipher.name(),
            mode: mode.name(),
            output: &result,
        })?
    } else {
        result
    };
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .map_err(|e| format!("failed to write '{}': {e}", path.display()))?;
            info!("result written to '{}'", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn keygen_command(cipher: Family, length: NonZeroUsize) -> Result<(), Box<dyn Error>> {
    let rendered = match cipher {
        Family::Caesar => keygen::random_shift().to_string(),
        Family::Vigenere | Family::Playfair => keygen::random_phrase(length),
        Family::Hill => {
            let [[a, b], [c, d]] = *keygen::random_matrix().rows();
            format!("{a} {b};{c} {d}")
        }
        Family::Atbash => return Err("the atbash cipher is keyless".into()),
    };
    println!("{rendered}");
    Ok(())
}
