//! Video credential hook.
//!
//! Plaza does not issue video-call credentials itself; that belongs to
//! an external provider (Twilio, LiveKit, a self-hosted SFU, ...).
//! The framework defines the [`VideoCredentialProvider`] trait, calls it
//! exactly once per admission, and treats the returned credential as an
//! opaque string. No retry, no caching: if the provider fails, admission
//! fails and the caller decides what to do.
//!
//! The trait boundary is also what makes the town controller testable:
//! tests swap in a provider that returns canned credentials or errors
//! without any network.

use plaza_protocol::{PlayerId, TownId};

use crate::SessionError;

/// Issues a video-call credential for one player joining one town.
///
/// # Trait bounds
///
/// - `Send + Sync` so the provider can be shared across async tasks.
/// - `'static` because it lives as long as the town it serves.
///
/// # Example
///
/// ```rust
/// use plaza_session::{SessionError, VideoCredentialProvider};
/// use plaza_protocol::{PlayerId, TownId};
///
/// /// Hands out predictable credentials. Only for development.
/// struct DevVideoProvider;
///
/// impl VideoCredentialProvider for DevVideoProvider {
///     async fn issue_credential(
///         &self,
///         town_id: &TownId,
///         player_id: &PlayerId,
///     ) -> Result<String, SessionError> {
///         Ok(format!("dev-{town_id}-{player_id}"))
///     }
/// }
/// ```
pub trait VideoCredentialProvider: Send + Sync + 'static {
    /// Issues a credential permitting `player_id` to join `town_id`'s
    /// video call.
    ///
    /// # Errors
    /// Returns [`SessionError::CredentialDenied`] if the provider
    /// refuses or the upstream call fails.
    fn issue_credential(
        &self,
        town_id: &TownId,
        player_id: &PlayerId,
    ) -> impl std::future::Future<Output = Result<String, SessionError>> + Send;
}
