//! Error types for the session layer.

/// Errors that can occur while establishing a player session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The external video provider refused to issue a credential, or
    /// the upstream call failed. Admission is transactional, so when
    /// this surfaces no player or session was registered.
    #[error("video credential denied: {0}")]
    CredentialDenied(String),
}
