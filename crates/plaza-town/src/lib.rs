//! Town state management for Plaza.
//!
//! One [`TownController`] owns the authoritative state of one shared
//! space: the live players, their credentialed sessions, the active
//! conversation areas, and the listeners subscribed to state changes.
//! Optionally each town runs as an isolated Tokio task (actor model)
//! behind a [`TownHandle`], which makes the one-operation-at-a-time
//! discipline explicit instead of conventional.
//!
//! # Key types
//!
//! - [`TownController`] - the state machine: admission, eviction,
//!   movement, area lifecycle
//! - [`ConversationArea`] - a labeled rectangular region that exists
//!   only while occupied
//! - [`TownListener`] / [`Subscribers`] - synchronous event fan-out
//! - [`TownHandle`] - send commands to a running town actor
//! - [`TownConfig`] - town settings (name, visibility, capacity)

mod actor;
mod area;
mod config;
mod controller;
mod error;
mod events;

pub use actor::{TownHandle, spawn_town};
pub use area::ConversationArea;
pub use config::TownConfig;
pub use controller::TownController;
pub use error::TownError;
pub use events::{Subscribers, TownListener};
