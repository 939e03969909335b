//! Integration tests for the public cipher surface.

use arcfour::{cipher, generate_keystream, schedule, CipherError, SBOX_LEN};

#[test]
fn known_answer_vectors() {
    // Standard RC4 test vectors.
    let cases: &[(&[u8], &[u8], &str)] = &[
        (b"Key", b"Plaintext", "bbf316e8d940af0ad3"),
        (b"Wiki", b"pedia", "1021bf0420"),
        (b"Secret", b"Attack at dawn", "45a01f645fc35b383552544b9bf5"),
    ];

    for (key, plaintext, expected) in cases {
        let ciphertext = cipher(key, plaintext).unwrap();
        assert_eq!(hex::encode(&ciphertext), *expected);
    }
}

#[test]
fn self_inverse_over_binary_payloads() {
    let key = b"binary key";
    let payloads: &[&[u8]] = &[
        b"",
        b"\x00",
        b"embedded\x00null\x00bytes",
        &[0u8; 512],
        &[0x00, 0xff, 0x7f, 0x80, 0x01],
    ];

    for payload in payloads {
        let ciphertext = cipher(key, payload).unwrap();
        assert_eq!(ciphertext.len(), payload.len());
        let recovered = cipher(key, &ciphertext).unwrap();
        assert_eq!(&recovered[..], *payload);
    }
}

#[test]
fn cipher_is_deterministic() {
    let first = cipher(b"Key", b"repeatable").unwrap();
    let second = cipher(b"Key", b"repeatable").unwrap();
    assert_eq!(first, second);
}

#[test]
fn scheduled_sbox_is_a_permutation() {
    let long_key: Vec<u8> = (0..=255u8).cycle().take(300).collect();

    let keys: &[&[u8]] = &[b"Key", b"x", &long_key];
    for key in keys {
        let sbox = schedule(key).unwrap();
        let mut counts = [0u32; SBOX_LEN];
        for &b in sbox.iter() {
            counts[b as usize] += 1;
        }
        assert!(counts.iter().all(|&c| c == 1));
    }
}

#[test]
fn keystream_matches_cipher_of_zeros() {
    // XOR against an all-zero message exposes the raw keystream.
    let mut sbox = schedule(b"Secret").unwrap();
    let keystream = generate_keystream(&mut sbox, 32);
    assert_eq!(keystream, cipher(b"Secret", &[0u8; 32]).unwrap());
}

#[test]
fn empty_key_is_rejected() {
    assert_eq!(schedule(b""), Err(CipherError::InvalidKey));
    assert_eq!(cipher(b"", b"anything"), Err(CipherError::InvalidKey));
    assert_eq!(cipher(b"", b""), Err(CipherError::InvalidKey));
}
