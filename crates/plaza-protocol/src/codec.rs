//! Codec trait and implementations for serializing town state.
//!
//! The protocol layer does not care how messages are serialized; it only
//! needs something implementing [`Codec`]. The transport binding picks
//! the codec. [`JsonCodec`] (human-readable, easy to inspect in browser
//! devtools) ships by default behind the `json` feature; a binary codec
//! can be added later without touching any other layer.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes Plaza types to bytes and decodes bytes back.
///
/// `Send + Sync + 'static` so a codec can be shared across the async
/// tasks that carry town traffic.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] if the bytes are malformed,
    /// truncated, or do not match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `serde_json`.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::{Player, PlayerId, PlayerLocation};

    #[test]
    fn test_json_codec_round_trips_player() {
        let codec = JsonCodec;
        let mut player = Player::new(PlayerId::from("p1"), "Grace");
        player.location = PlayerLocation::in_area(3.0, 4.0, "L1");

        let bytes = codec.encode(&player).unwrap();
        let decoded: Player = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, player);
    }

    #[test]
    fn test_json_codec_decode_garbage_fails() {
        let codec = JsonCodec;
        let result: Result<Player, _> = codec.decode(b"not json at all");
        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }
}
