//! Short unique identifiers for entities.
//!
//! A random v4 UUID rendered in base57 over an alphabet without visually
//! ambiguous characters (`0`, `1`, `I`, `O`, `l`), left-padded to a fixed
//! width.

use uuid::Uuid;

const ALPHABET: &[u8; 57] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encoded length; 57^22 exceeds 2^128 so every UUID fits.
pub const SHORT_ID_LEN: usize = 22;

/// Generates a new short unique ID.
pub fn new_short_id() -> String {
    encode_uuid(Uuid::new_v4())
}

/// Encodes a UUID into its fixed-width short form.
pub fn encode_uuid(uuid: Uuid) -> String {
    let base = ALPHABET.len() as u128;
    let mut value = uuid.as_u128();
    let mut digits = Vec::with_capacity(SHORT_ID_LEN);
    while value > 0 {
        digits.push(ALPHABET[(value % base) as usize]);
        value /= base;
    }
    digits.resize(SHORT_ID_LEN, ALPHABET[0]);
    digits.iter().rev().map(|&b| char::from(b)).collect()
}

/// Returns whether `value` has the shape of a generated short ID.
pub fn is_short_id(value: &str) -> bool {
    value.len() == SHORT_ID_LEN && value.bytes().all(|b| ALPHABET.contains(&b))
}
