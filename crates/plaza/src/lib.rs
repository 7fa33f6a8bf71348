//! # Plaza
//!
//! Authoritative state engine for shared social spaces ("towns").
//!
//! Each town tracks its connected players, their positions, the active
//! conversation areas grouping co-located players, and the listeners
//! subscribed to every state change. The transport layer (WebSockets,
//! HTTP, whatever carries your traffic) lives outside this workspace:
//! it translates wire messages into calls on a [`TownHandle`] and
//! renders [`TownListener`](plaza_town::TownListener) callbacks back
//! onto the wire.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use plaza::prelude::*;
//!
//! # struct MyVideoProvider;
//! # impl plaza_session::VideoCredentialProvider for MyVideoProvider {
//! #     async fn issue_credential(
//! #         &self,
//! #         _t: &TownId,
//! #         _p: &PlayerId,
//! #     ) -> Result<String, plaza_session::SessionError> { Ok("tok".into()) }
//! # }
//! # async fn run() -> Result<(), PlazaError> {
//! let town = spawn_town(TownConfig::new("My Town", true), MyVideoProvider);
//!
//! let session = town
//!     .admit(Player::new(PlayerId::from("p1"), "Ada"))
//!     .await?;
//! town.move_player(session.player_id.clone(), PlayerLocation::at(10.0, 10.0))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::PlazaError;

/// One-stop imports for binaries and transport bindings.
pub mod prelude {
    pub use crate::PlazaError;
    pub use plaza_protocol::{
        BoundingBox, Direction, Player, PlayerId, PlayerLocation, TownId,
    };
    pub use plaza_session::{PlayerSession, VideoCredentialProvider};
    pub use plaza_town::{
        ConversationArea, TownConfig, TownController, TownHandle, TownListener, spawn_town,
    };
}

pub use plaza_town::spawn_town;
pub use plaza_town::{TownConfig, TownHandle};

/// Installs a `tracing` subscriber reading filter directives from
/// `RUST_LOG` (default `info`).
///
/// Call once at process start; calling again is a no-op (the first
/// subscriber wins).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
