//! arcfour - RC4 stream cipher demonstrator
//!
//! Encrypts the given payload under the given key, prints the ciphertext as
//! hex, then re-applies the cipher and prints the recovered payload.

mod cli;

fn main() {
    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
