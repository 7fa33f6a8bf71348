//! Identity and movement types shared by every Plaza layer.
//!
//! These are the structures that travel between the transport layer and
//! the town engine, so their serialized shapes are part of the wire
//! contract: ids serialize as plain strings, directions as lowercase
//! words, and locations as flat objects.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a player.
///
/// Newtype over `String`: the id is opaque and unguessable (generated
/// server-side from 16 random bytes), and wrapping it keeps a `PlayerId`
/// from being confused with a session token or a town id even though all
/// three are strings underneath.
///
/// `#[serde(transparent)]` makes it serialize as the bare string, not as
/// `{ "0": "..." }`, which is what client SDKs expect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A unique identifier for a town.
///
/// Towns get short, human-friendly ids (8 uppercase hex characters) so
/// they can be read over voice chat and typed into a join dialog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TownId(pub String);

impl fmt::Display for TownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TownId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

/// The direction a player's avatar is facing.
///
/// Serialized lowercase (`"front"`, `"back"`, ...) to match the client's
/// sprite naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Front,
    Back,
    Left,
    Right,
}

/// A player's reported position within the town.
///
/// `conversation_label` is the area label the client asserts it is in.
/// Membership resolution on movement trusts this label, not the raw
/// coordinates; coordinates only establish membership at area creation
/// time (see the town crate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLocation {
    pub x: f64,
    pub y: f64,
    pub rotation: Direction,
    pub moving: bool,
    /// Label of the conversation area the client claims to occupy, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_label: Option<String>,
}

impl PlayerLocation {
    /// A stationary location at the given coordinates, facing front,
    /// asserting no conversation area.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            rotation: Direction::Front,
            moving: false,
            conversation_label: None,
        }
    }

    /// Same as [`at`](Self::at) but asserting membership in the area
    /// with the given label.
    pub fn in_area(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            conversation_label: Some(label.into()),
            ..Self::at(x, y)
        }
    }
}

impl Default for PlayerLocation {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A player currently connected to a town.
///
/// Created on admission, mutated on every move, destroyed on eviction.
/// `active_conversation_area` holds the label of the single area whose
/// occupant list contains this player, or `None`. The town controller
/// maintains the invariant that this field and the occupant lists never
/// disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub user_name: String,
    pub location: PlayerLocation,
    /// Label of the area this player occupies, if any. Not an owning
    /// reference: the area itself lives in the town's active-area list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_conversation_area: Option<String>,
}

impl Player {
    /// Creates a player with a fresh location at the origin.
    pub fn new(id: PlayerId, user_name: impl Into<String>) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            location: PlayerLocation::default(),
            active_conversation_area: None,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
