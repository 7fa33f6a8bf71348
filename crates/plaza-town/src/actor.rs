//! Town actor: an isolated Tokio task that owns a town controller.
//!
//! The controller assumes one mutating operation completes before the
//! next begins. Running it inside an actor makes that assumption a
//! structural guarantee instead of a calling convention: the task owns
//! the controller outright, and the outside world reaches it only
//! through [`TownHandle`] commands on an mpsc channel, processed one at
//! a time.
//!
//! The credential fetch inside admission stays the single suspension
//! point; while it is pending, this town processes nothing else. A hung
//! provider therefore stalls this town's queue but no other town.

use std::sync::Arc;

use plaza_protocol::{Player, PlayerId, PlayerLocation, TownId};
use plaza_session::{PlayerSession, VideoCredentialProvider};
use tokio::sync::{mpsc, oneshot};

use crate::{ConversationArea, TownConfig, TownController, TownError, TownListener};

/// Default command channel size for town actors.
const DEFAULT_CHANNEL_SIZE: usize = 64;

/// Commands sent to a town actor through its channel.
///
/// The `oneshot::Sender` in most variants is a reply channel: the
/// caller sends a command and awaits the response on it.
pub(crate) enum TownCommand {
    Admit {
        player: Player,
        reply: oneshot::Sender<Result<PlayerSession, TownError>>,
    },
    Evict {
        session: PlayerSession,
        reply: oneshot::Sender<Result<(), TownError>>,
    },
    MovePlayer {
        player_id: PlayerId,
        location: PlayerLocation,
        reply: oneshot::Sender<Result<(), TownError>>,
    },
    CreateArea {
        area: ConversationArea,
        reply: oneshot::Sender<Result<(), TownError>>,
    },
    LookupSession {
        token: String,
        reply: oneshot::Sender<Option<PlayerSession>>,
    },
    Subscribe {
        listener: Arc<dyn TownListener>,
    },
    Unsubscribe {
        listener: Arc<dyn TownListener>,
    },
    DisconnectAll {
        reply: oneshot::Sender<()>,
    },
}

/// Handle to a running town actor. Cheap to clone; the town registry
/// holds one per town and hands clones to transport sessions.
#[derive(Clone)]
pub struct TownHandle {
    town_id: TownId,
    sender: mpsc::Sender<TownCommand>,
}

impl TownHandle {
    /// The id of the town this handle talks to.
    pub fn town_id(&self) -> &TownId {
        &self.town_id
    }

    /// Admits a player, returning their credentialed session.
    pub async fn admit(&self, player: Player) -> Result<PlayerSession, TownError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(TownCommand::Admit {
                player,
                reply: reply_tx,
            })
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))?
    }

    /// Evicts a player by their session.
    pub async fn evict(&self, session: PlayerSession) -> Result<(), TownError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(TownCommand::Evict {
                session,
                reply: reply_tx,
            })
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))?
    }

    /// Reports a player's movement update.
    pub async fn move_player(
        &self,
        player_id: PlayerId,
        location: PlayerLocation,
    ) -> Result<(), TownError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(TownCommand::MovePlayer {
                player_id,
                location,
                reply: reply_tx,
            })
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))?
    }

    /// Requests creation of a conversation area.
    pub async fn create_area(&self, area: ConversationArea) -> Result<(), TownError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(TownCommand::CreateArea {
                area,
                reply: reply_tx,
            })
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))?
    }

    /// Looks up the session holding exactly this token.
    pub async fn lookup_session(&self, token: impl Into<String>) -> Result<Option<PlayerSession>, TownError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(TownCommand::LookupSession {
                token: token.into(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))
    }

    /// Subscribes a listener to this town's events (fire-and-forget).
    pub async fn subscribe(&self, listener: Arc<dyn TownListener>) -> Result<(), TownError> {
        self.sender
            .send(TownCommand::Subscribe { listener })
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))
    }

    /// Unsubscribes a previously registered listener (fire-and-forget).
    pub async fn unsubscribe(&self, listener: Arc<dyn TownListener>) -> Result<(), TownError> {
        self.sender
            .send(TownCommand::Unsubscribe { listener })
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))
    }

    /// Destroys the town. Resolves once every subscriber has been told.
    ///
    /// The actor keeps draining its queue afterwards so late callers get
    /// a definite [`TownError::TownDestroyed`] rather than a closed
    /// channel; the task exits when the last handle is dropped.
    pub async fn disconnect_all(&self) -> Result<(), TownError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(TownCommand::DisconnectAll { reply: reply_tx })
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| TownError::Unavailable(self.town_id.clone()))
    }
}

/// The actor loop: owns the controller, processes commands in order.
struct TownActor<V> {
    controller: TownController<V>,
    receiver: mpsc::Receiver<TownCommand>,
}

impl<V: VideoCredentialProvider> TownActor<V> {
    async fn run(mut self) {
        let town_id = self.controller.town_id().clone();
        tracing::info!(%town_id, "town actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                TownCommand::Admit { player, reply } => {
                    let result = self.controller.admit(player).await;
                    let _ = reply.send(result);
                }
                TownCommand::Evict { session, reply } => {
                    let _ = reply.send(self.controller.evict(&session));
                }
                TownCommand::MovePlayer {
                    player_id,
                    location,
                    reply,
                } => {
                    let _ = reply.send(self.controller.move_player(&player_id, location));
                }
                TownCommand::CreateArea { area, reply } => {
                    let _ = reply.send(self.controller.create_area(area));
                }
                TownCommand::LookupSession { token, reply } => {
                    let _ = reply.send(self.controller.lookup_session(&token).cloned());
                }
                TownCommand::Subscribe { listener } => {
                    self.controller.subscribe(listener);
                }
                TownCommand::Unsubscribe { listener } => {
                    self.controller.unsubscribe(&listener);
                }
                TownCommand::DisconnectAll { reply } => {
                    self.controller.disconnect_all();
                    let _ = reply.send(());
                }
            }
        }

        tracing::info!(%town_id, "town actor stopped");
    }
}

/// Spawns a new town actor and returns a handle to communicate with it.
///
/// The bounded channel provides backpressure: if a town falls behind,
/// senders wait rather than queueing without limit.
pub fn spawn_town<V: VideoCredentialProvider>(config: TownConfig, video: V) -> TownHandle {
    let (tx, rx) = mpsc::channel(DEFAULT_CHANNEL_SIZE);

    let controller = TownController::new(config, video);
    let town_id = controller.town_id().clone();

    let actor = TownActor {
        controller,
        receiver: rx,
    };
    tokio::spawn(actor.run());

    TownHandle {
        town_id,
        sender: tx,
    }
}
