//! The session type: the server's record of one connected player.

use plaza_protocol::PlayerId;

use crate::token::generate_token;

/// The credentialed relationship between one player and one town.
///
/// Created during admission, destroyed on eviction; 1:1 with its player
/// for the whole lifetime. The shared `Player` record itself is owned by
/// the town controller's live list; the session refers to it by id so
/// there is exactly one mutable copy of each player's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSession {
    /// The player this session belongs to.
    pub player_id: PlayerId,

    /// A secret token the transport layer presents on every message to
    /// prove which player is speaking. 32 hex characters (128 bits of
    /// entropy), so guessing a live token is computationally infeasible.
    pub session_token: String,

    /// The credential the client uses to join the town's video call.
    /// Issued by the external
    /// [`VideoCredentialProvider`](crate::VideoCredentialProvider);
    /// opaque to Plaza.
    pub video_token: String,
}

impl PlayerSession {
    /// Creates a fully-formed session with a fresh session token.
    ///
    /// The video credential must already have been obtained: a session
    /// only ever exists in a credentialed state. (Admission fetches the
    /// credential first and constructs the session on success.)
    pub fn new(player_id: PlayerId, video_token: impl Into<String>) -> Self {
        let session = Self {
            player_id,
            session_token: generate_token(),
            video_token: video_token.into(),
        };
        tracing::debug!(player_id = %session.player_id, "session created");
        session
    }
}
