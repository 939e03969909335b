//! Command-line interface

use anyhow::Context;
use arcfour::cipher;
use clap::Parser;

#[derive(Parser)]
#[command(name = "arcfour")]
#[command(version)]
#[command(about = "Encrypt and decrypt text with the RC4 (Arcfour) stream cipher", long_about = "Encrypt and decrypt text with the RC4 (Arcfour) stream cipher\n\nThe payload is encrypted under the key and printed as hex, then the cipher\nis applied a second time to demonstrate recovery of the original payload.")]
pub struct Cli {
    /// Payload to encrypt (hex string when --hex is given)
    pub text: String,

    /// Secret key (must not be empty)
    pub key: String,

    /// Decode TEXT from hex before ciphering, so binary payloads can
    /// round-trip through the terminal
    #[arg(long)]
    pub hex: bool,
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let message = if cli.hex {
        hex::decode(cli.text.trim()).context("TEXT is not a valid hex string")?
    } else {
        cli.text.into_bytes()
    };

    let ciphertext = cipher(cli.key.as_bytes(), &message)?;
    println!("Ciphertext (hex): {}", hex::encode(&ciphertext));

    let recovered = cipher(cli.key.as_bytes(), &ciphertext)?;
    if cli.hex {
        println!("Recovered (hex):  {}", hex::encode(&recovered));
    } else {
        println!("Recovered:        {}", String::from_utf8_lossy(&recovered));
    }

    Ok(())
}
