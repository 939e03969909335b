//! Cryptographic operations module

pub mod rc4;

pub use rc4::{cipher, generate_keystream, schedule, Sbox, SBOX_LEN};
