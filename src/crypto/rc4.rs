//! RC4 (Arcfour) key scheduling, keystream generation and XOR combine

use crate::error::CipherError;

/// Number of entries in the cipher state table.
pub const SBOX_LEN: usize = 256;

/// Cipher state: a permutation of the byte values 0..=255.
pub type Sbox = [u8; SBOX_LEN];

/// Key-scheduling algorithm (KSA).
///
/// Builds the initial permutation of 0..=255 biased by `key`. Key bytes are
/// consumed with wraparound indexing, so keys longer than 256 bytes are
/// accepted. An empty key is rejected with [`CipherError::InvalidKey`].
pub fn schedule(key: &[u8]) -> Result<Sbox, CipherError> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey);
    }

    let mut s: Sbox = [0; SBOX_LEN];
    for (i, entry) in s.iter_mut().enumerate() {
        *entry = i as u8;
    }

    let mut j: usize = 0;
    for i in 0..SBOX_LEN {
        j = (j + s[i] as usize + key[i % key.len()] as usize) % 256;
        s.swap(i, j);
    }

    Ok(s)
}

/// Pseudo-random generation algorithm (PRGA).
///
/// Emits `len` keystream bytes, permanently evolving `sbox` as it runs.
/// Pair one freshly scheduled S-box with exactly one keystream request;
/// reusing an evolved S-box continues the stream rather than restarting it.
pub fn generate_keystream(sbox: &mut Sbox, len: usize) -> Vec<u8> {
    let mut keystream = Vec::with_capacity(len);
    let mut i: usize = 0;
    let mut j: usize = 0;

    for _ in 0..len {
        i = (i + 1) % 256;
        j = (j + sbox[i] as usize) % 256;
        sbox.swap(i, j);
        keystream.push(sbox[(sbox[i] as usize + sbox[j] as usize) % 256]);
    }

    keystream
}

/// RC4 encryption/decryption (symmetric).
///
/// Schedules a fresh S-box from `key`, derives a keystream as long as
/// `message` and XORs the two. Applying the same call again with the same
/// key recovers the original message.
pub fn cipher(key: &[u8], message: &[u8]) -> Result<Vec<u8>, CipherError> {
    let mut sbox = schedule(key)?;
    let keystream = generate_keystream(&mut sbox, message.len());

    Ok(message
        .iter()
        .zip(&keystream)
        .map(|(byte, k)| byte ^ k)
        .collect())
}
