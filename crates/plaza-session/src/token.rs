//! Random token generation.

use rand::Rng;

/// Generates a random 32-character hex string (128 bits of entropy).
///
/// Used for session tokens and player ids: both must be unguessable,
/// because presenting one is how the transport layer proves identity.
pub fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
