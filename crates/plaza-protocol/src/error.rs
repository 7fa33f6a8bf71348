//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding Plaza types.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust type into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes into a Rust type).
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The value decoded fine but violates a protocol rule, e.g. a
    /// location with a non-finite coordinate.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
