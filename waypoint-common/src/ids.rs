//! Entity id generation
//!
//! Local stores use a timestamp + random suffix scheme (`evt-lx9k2a1c-4f8q2m7zt`),
//! which is practically unique without coordination. The API service assigns
//! UUIDv4 ids instead; both are opaque strings to every consumer.

use rand::Rng;
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a local id with the given prefix
pub fn generate(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}-{}-{}", prefix, to_base36(millis), suffix)
}

/// Generate a new UUIDv4 string (server-assigned ids)
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
