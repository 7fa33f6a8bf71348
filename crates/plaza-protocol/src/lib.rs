//! Shared data model for Plaza.
//!
//! This crate defines the types that every other layer speaks in:
//!
//! - **Identity** ([`TownId`], [`PlayerId`]) - who and where.
//! - **Movement** ([`PlayerLocation`], [`Direction`], [`Player`]) - the
//!   live state reported by clients and tracked by the town.
//! - **Geometry** ([`BoundingBox`]) - the rectangular regions that
//!   conversation areas occupy, with the strict containment/overlap
//!   rules the area engine depends on.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) - how these types are
//!   converted to/from bytes at the transport boundary.
//!
//! # Architecture
//!
//! The protocol layer is the leaf of the workspace. It knows nothing
//! about sessions, listeners, or towns; it only defines data shapes and
//! the geometric predicates on them.
//!
//! ```text
//! Transport (bytes) → Protocol (types) → Session / Town (behavior)
//! ```

mod codec;
mod error;
mod geometry;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use geometry::BoundingBox;
pub use types::{Direction, Player, PlayerId, PlayerLocation, TownId};
