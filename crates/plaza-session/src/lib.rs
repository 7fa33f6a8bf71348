//! Player session management for Plaza.
//!
//! A session is the credentialed relationship between one connected
//! player and one town. It carries two secrets:
//!
//! 1. a **session token** - generated here, presented by the transport
//!    layer on every wire message to prove which player is speaking;
//! 2. a **video credential** - obtained from an external provider
//!    ([`VideoCredentialProvider`]) so the client can join the town's
//!    video call.
//!
//! # How it fits in the stack
//!
//! ```text
//! Town layer (above)   ← owns the live session list, admits/evicts
//!     ↕
//! Session layer (this crate)  ← session identity, tokens, credentials
//!     ↕
//! Protocol layer (below)      ← provides TownId, PlayerId
//! ```

#![allow(async_fn_in_trait)]

mod error;
mod session;
mod token;
mod video;

pub use error::SessionError;
pub use session::PlayerSession;
pub use token::generate_token;
pub use video::VideoCredentialProvider;
