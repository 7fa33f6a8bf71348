//! Town configuration and credential generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alphabet for friendly town ids: readable over voice chat, no
/// ambiguous characters beyond hex.
const TOWN_ID_ALPHABET: &[u8] = b"1234567890ABCDEF";
const TOWN_ID_LEN: usize = 8;

/// Alphabet for update passwords.
const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
const PASSWORD_LEN: usize = 24;

/// Settings for a town instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TownConfig {
    /// Human-readable town name, shown in listings.
    pub friendly_name: String,

    /// Whether this town appears in public listings.
    pub is_publicly_listed: bool,

    /// Maximum number of players. Tracked as metadata; enforcement is
    /// the admission caller's policy.
    pub capacity: usize,
}

impl TownConfig {
    /// Creates a config with the default capacity.
    pub fn new(friendly_name: impl Into<String>, is_publicly_listed: bool) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            is_publicly_listed,
            ..Self::default()
        }
    }
}

impl Default for TownConfig {
    fn default() -> Self {
        Self {
            friendly_name: String::new(),
            is_publicly_listed: false,
            capacity: 50,
        }
    }
}

/// Generates a friendly 8-character town id (uppercase hex).
///
/// 16^8 values is plenty for a registry of live towns, and short enough
/// to read to a friend.
pub(crate) fn generate_town_id() -> String {
    random_string(TOWN_ID_ALPHABET, TOWN_ID_LEN)
}

/// Generates a 24-character update password.
///
/// Holders of this credential may perform administrative mutations
/// (rename, relist) through the external management surface.
pub(crate) fn generate_update_password() -> String {
    random_string(PASSWORD_ALPHABET, PASSWORD_LEN)
}

fn random_string(alphabet: &[u8], len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}
