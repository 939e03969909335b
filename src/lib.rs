//! Arcfour - classical RC4 stream cipher
//!
//! Implements the key-scheduling algorithm (KSA), the pseudo-random
//! generation algorithm (PRGA) and the symmetric XOR cipher built from the
//! two. Messages and keys are explicit-length byte slices, so payloads
//! containing zero bytes round-trip correctly.
//!
//! RC4 is broken by modern cryptographic standards. This crate reproduces
//! the classical algorithm for interoperability and study, not as a secure
//! protocol: it provides no authentication or integrity.

pub mod crypto;
pub mod error;

pub use crypto::{cipher, generate_keystream, schedule, Sbox, SBOX_LEN};
pub use error::CipherError;
