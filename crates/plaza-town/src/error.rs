//! Error types for the town layer.

use plaza_protocol::{PlayerId, TownId};
use plaza_session::SessionError;

/// Errors that can occur during town operations.
///
/// Area-creation rejections (`EmptyTopic`, `DuplicateLabel`,
/// `RegionOverlap`) guarantee that no partial mutation occurred and no
/// event was emitted.
#[derive(Debug, thiserror::Error)]
pub enum TownError {
    /// A conversation area must have a non-empty topic.
    #[error("conversation area topic must not be empty")]
    EmptyTopic,

    /// An active area already uses this label.
    #[error("conversation area label {0:?} already in use")]
    DuplicateLabel(String),

    /// The requested region overlaps an active area's region.
    /// Edge-touching regions are fine; interior overlap is not.
    #[error("conversation area {0:?} would overlap an active area")]
    RegionOverlap(String),

    /// The player id is not in this town's live list.
    #[error("player {0} is not in this town")]
    UnknownPlayer(PlayerId),

    /// No live session matches the given token.
    #[error("session not found")]
    UnknownSession,

    /// The town was destroyed; no further mutations are accepted.
    #[error("town {0} has been destroyed")]
    TownDestroyed(TownId),

    /// Credential provisioning failed during admission. Admission is
    /// transactional: nothing was registered.
    #[error(transparent)]
    Credential(#[from] SessionError),

    /// The town actor's command channel is closed or full.
    #[error("town {0} is unavailable")]
    Unavailable(TownId),
}
