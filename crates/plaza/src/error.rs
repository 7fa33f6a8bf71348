//! Unified error type for the Plaza workspace.

use plaza_protocol::ProtocolError;
use plaza_session::SessionError;
use plaza_town::TownError;

/// Top-level error that wraps all crate-specific errors.
///
/// Callers of the `plaza` meta-crate deal with this single type; the
/// `#[from]` attributes let `?` convert sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum PlazaError {
    /// An encode/decode error at the protocol boundary.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A session-level error (credential provisioning).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A town-level error (validation, membership, lifecycle).
    #[error(transparent)]
    Town(#[from] TownError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::InvalidMessage("bad".into());
        let plaza_err: PlazaError = err.into();
        assert!(matches!(plaza_err, PlazaError::Protocol(_)));
        assert!(plaza_err.to_string().contains("bad"));
    }

    #[test]
    fn test_from_session_error() {
        let err = SessionError::CredentialDenied("nope".into());
        let plaza_err: PlazaError = err.into();
        assert!(matches!(plaza_err, PlazaError::Session(_)));
        assert!(plaza_err.to_string().contains("nope"));
    }

    #[test]
    fn test_from_town_error() {
        let err = TownError::EmptyTopic;
        let plaza_err: PlazaError = err.into();
        assert!(matches!(plaza_err, PlazaError::Town(_)));
    }
}
