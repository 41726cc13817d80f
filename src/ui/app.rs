// Console application for the RSA demo
// Parses the command line, then walks through key generation, encryption and decryption

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};

use crate::rsa::{decrypt, encrypt, generate_public_key, RsaBigInt, RsaPublicKey};
use crate::util::config::DemoConfig;

/// Textbook RSA demonstration over small primes.
///
/// Run without arguments to use message 77 with primes 79 and 97,
/// or pass all three values.
#[derive(Parser, Debug)]
#[command(name = "rsa_demo", version, about)]
pub struct Cli {
    /// Integer to encrypt, below PRIME1 * PRIME2
    #[arg(requires = "prime1")]
    pub message: Option<RsaBigInt>,

    /// First prime
    #[arg(requires = "prime2")]
    pub prime1: Option<RsaBigInt>,

    /// Second prime, distinct from the first
    pub prime2: Option<RsaBigInt>,

    /// Increase log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Demo inputs, falling back to the defaults when no values were given
    pub fn config(&self) -> DemoConfig {
        match (&self.message, &self.prime1, &self.prime2) {
            (Some(message), Some(prime1), Some(prime2)) => {
                DemoConfig::new(message.clone(), prime1.clone(), prime2.clone())
            }
            _ => DemoConfig::default(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Values produced by a demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub public_key: RsaPublicKey,
    pub ciphertext: RsaBigInt,
    pub plaintext: RsaBigInt,
}

/// Run the full demo, writing progress to `out`
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<DemoReport> {
    writeln!(out, "[+] Message: {}", config.message)?;
    writeln!(out, "[+] Prime 1: {}", config.prime1)?;
    writeln!(out, "[+] Prime 2: {}", config.prime2)?;

    let public_key = generate_public_key(&config.prime1, &config.prime2)
        .context("failed to generate public key")?;
    writeln!(out, "[+] The exponent: {}", public_key.e)?;
    writeln!(out, "[+] The modulus: {}", public_key.n)?;
    writeln!(out, "[+] Public key: {}", public_key)?;

    writeln!(out, "[+] Starting encryptor...")?;
    let ciphertext = encrypt(&config.message, &public_key).context("failed to encrypt message")?;
    writeln!(
        out,
        "[+] Encrypted message: {} (0x{})",
        ciphertext,
        hex::encode(ciphertext.to_bytes_be())
    )?;

    writeln!(out, "[+] Starting decryptor...")?;
    let plaintext = decrypt(&ciphertext, &config.prime1, &config.prime2)
        .context("failed to decrypt message")?;
    writeln!(out, "[+] Decrypted message: {}", plaintext)?;

    if plaintext != config.message {
        info!(
            "message {} did not round-trip (got {}); it must be below the modulus {}",
            config.message, plaintext, public_key.n
        );
    }

    Ok(DemoReport {
        public_key,
        ciphertext,
        plaintext,
    })
}

/// Entry point for the binary
pub fn create_app() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = cli.config();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&config, &mut out)?;
    Ok(())
}
