//! The town controller: the authoritative state machine for one town.
//!
//! One controller owns one town's live state (players, sessions,
//! conversation areas, subscribers) exclusively. No other component
//! mutates these lists; the transport layer drives them through the
//! operations here and observes the results through [`TownListener`]
//! callbacks.
//!
//! # Event contract
//!
//! Every mutating operation decides which events occurred and delivers
//! them to all current subscribers before returning, in a fixed order:
//! area-removal events precede area-insertion events within a call, and
//! `on_player_moved` fires exactly once per movement update, last. On a
//! rejected operation nothing was mutated and nothing fires.
//!
//! # Concurrency
//!
//! The controller is logically single-threaded: operations run to
//! completion one at a time with no internal locking. The one suspension
//! point is the credential fetch inside [`admit`](TownController::admit).
//! To make the serialization discipline explicit instead of
//! conventional, run the controller behind a town actor
//! ([`spawn_town`](crate::spawn_town)).

use plaza_protocol::{Player, PlayerId, PlayerLocation, TownId};
use plaza_session::{PlayerSession, VideoCredentialProvider};
use std::sync::Arc;

use crate::config::{generate_town_id, generate_update_password};
use crate::{ConversationArea, Subscribers, TownConfig, TownError, TownListener};

/// Authoritative state of one town.
///
/// Generic over the [`VideoCredentialProvider`] so production wires in a
/// real provider while tests use a canned one.
pub struct TownController<V> {
    town_id: TownId,
    friendly_name: String,
    town_update_password: String,
    capacity: usize,
    is_publicly_listed: bool,

    /// Players currently in the town, in admission order.
    players: Vec<Player>,
    /// Live sessions, 1:1 with `players`.
    sessions: Vec<PlayerSession>,
    /// Active conversation areas. Labels unique, regions non-overlapping,
    /// occupant lists never empty after an operation settles.
    conversation_areas: Vec<ConversationArea>,
    subscribers: Subscribers,

    video: V,
    /// Set by [`disconnect_all`](Self::disconnect_all); terminal.
    destroyed: bool,
}

impl<V: VideoCredentialProvider> TownController<V> {
    /// Creates a town with a fresh friendly id and update password.
    pub fn new(config: TownConfig, video: V) -> Self {
        let town_id = TownId(generate_town_id());
        tracing::info!(%town_id, friendly_name = %config.friendly_name, "town created");
        Self {
            town_id,
            friendly_name: config.friendly_name,
            town_update_password: generate_update_password(),
            capacity: config.capacity,
            is_publicly_listed: config.is_publicly_listed,
            players: Vec::new(),
            sessions: Vec::new(),
            conversation_areas: Vec::new(),
            subscribers: Subscribers::new(),
            video,
            destroyed: false,
        }
    }

    // -- Accessors ---------------------------------------------------------

    pub fn town_id(&self) -> &TownId {
        &self.town_id
    }

    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    pub fn set_friendly_name(&mut self, value: impl Into<String>) {
        self.friendly_name = value.into();
    }

    pub fn is_publicly_listed(&self) -> bool {
        self.is_publicly_listed
    }

    pub fn set_is_publicly_listed(&mut self, value: bool) {
        self.is_publicly_listed = value;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The credential required for administrative mutations through the
    /// external management surface.
    pub fn town_update_password(&self) -> &str {
        &self.town_update_password
    }

    /// The live player list, in admission order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The active conversation areas.
    pub fn conversation_areas(&self) -> &[ConversationArea] {
        &self.conversation_areas
    }

    /// Number of subscribed listeners. Each connected client's transport
    /// session registers one listener, so this counts connections.
    pub fn occupancy(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` once [`disconnect_all`](Self::disconnect_all) has
    /// run; a destroyed town rejects every further mutation.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // -- Event subscription ------------------------------------------------

    /// Subscribes to this town's events. Callers should unsubscribe when
    /// they no longer want them.
    pub fn subscribe(&mut self, listener: Arc<dyn TownListener>) {
        self.subscribers.subscribe(listener);
    }

    /// Unsubscribes a listener previously registered with
    /// [`subscribe`](Self::subscribe); a no-op for anything else.
    pub fn unsubscribe(&mut self, listener: &Arc<dyn TownListener>) {
        self.subscribers.unsubscribe(listener);
    }

    // -- Player/session management -----------------------------------------

    /// Admits a player: provisions a video credential, registers the
    /// player and a fresh session, and announces the join.
    ///
    /// Admission is transactional. The credential is fetched FIRST; only
    /// on success do the player and session enter the live lists, and
    /// only then does `on_player_joined` fire. A provider failure
    /// propagates with no state change, so there is never a registered
    /// player whose join was not announced.
    ///
    /// This await is the controller's single suspension point. A hung
    /// provider stalls only this admission.
    ///
    /// # Errors
    /// [`TownError::Credential`] if the provider refuses;
    /// [`TownError::TownDestroyed`] after [`disconnect_all`](Self::disconnect_all).
    pub async fn admit(&mut self, player: Player) -> Result<PlayerSession, TownError> {
        self.ensure_live()?;

        let video_token = self
            .video
            .issue_credential(&self.town_id, &player.id)
            .await?;
        let session = PlayerSession::new(player.id.clone(), video_token);

        let announced = player.clone();
        self.players.push(player);
        self.sessions.push(session.clone());
        tracing::info!(
            town_id = %self.town_id,
            player_id = %session.player_id,
            players = self.players.len(),
            "player admitted"
        );

        self.subscribers.notify(|l| l.on_player_joined(&announced));
        Ok(session)
    }

    /// Evicts a player: removes the player and session from the live
    /// lists, resolves any conversation-area membership they held, and
    /// announces the disconnect.
    ///
    /// Cascading area events (`on_conversation_area_updated` or
    /// `on_conversation_area_destroyed`) fire strictly before the single
    /// `on_player_disconnected`.
    ///
    /// # Errors
    /// [`TownError::UnknownSession`] if the session token is not live.
    pub fn evict(&mut self, session: &PlayerSession) -> Result<(), TownError> {
        self.ensure_live()?;

        let pos = self
            .sessions
            .iter()
            .position(|s| s.session_token == session.session_token)
            .ok_or(TownError::UnknownSession)?;
        let session = self.sessions.remove(pos);

        let player = match self.players.iter().position(|p| p.id == session.player_id) {
            Some(i) => Some(self.players.remove(i)),
            None => None,
        };

        if let Some(player) = player {
            if let Some(label) = player.active_conversation_area.clone() {
                self.remove_from_area(&player.id, &label);
            }
            tracing::info!(
                town_id = %self.town_id,
                player_id = %player.id,
                players = self.players.len(),
                "player evicted"
            );
            self.subscribers.notify(|l| l.on_player_disconnected(&player));
        }
        Ok(())
    }

    /// Fetches the session holding exactly this token, if any.
    ///
    /// Linear exact-match scan; no side effects. The transport layer
    /// treats `None` as "refuse the connection".
    pub fn lookup_session(&self, token: &str) -> Option<&PlayerSession> {
        self.sessions.iter().find(|s| s.session_token == token)
    }

    /// Destroys the town: every subscriber gets one `on_town_destroyed`,
    /// the live lists are cleared, and the controller enters a terminal
    /// state where all further mutations fail with
    /// [`TownError::TownDestroyed`]. Calling this twice is a no-op the
    /// second time.
    pub fn disconnect_all(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.players.clear();
        self.sessions.clear();
        self.conversation_areas.clear();
        tracing::info!(town_id = %self.town_id, "town destroyed");
        self.subscribers.notify(|l| l.on_town_destroyed());
    }

    // -- Conversation area engine ------------------------------------------

    /// Creates a conversation area.
    ///
    /// Validation happens before any mutation: an empty topic, a label
    /// collision, or a (strict) region overlap rejects the request with
    /// no state change and no events. Otherwise the area is registered
    /// and every tracked player standing strictly inside its region, and
    /// not already in an area, becomes an occupant. This geometric scan
    /// is the only place raw coordinates establish membership; movement
    /// resolves membership from labels.
    ///
    /// Emits exactly one `on_conversation_area_updated`, even when the
    /// scan found nobody.
    ///
    /// Any occupants supplied on `candidate` are ignored.
    pub fn create_area(&mut self, candidate: ConversationArea) -> Result<(), TownError> {
        self.ensure_live()?;

        if candidate.topic.is_empty() {
            return Err(TownError::EmptyTopic);
        }
        if self
            .conversation_areas
            .iter()
            .any(|a| a.label == candidate.label)
        {
            return Err(TownError::DuplicateLabel(candidate.label));
        }
        if self
            .conversation_areas
            .iter()
            .any(|a| a.bounding_box.overlaps(&candidate.bounding_box))
        {
            return Err(TownError::RegionOverlap(candidate.label));
        }

        let mut area = candidate;
        area.occupants.clear();
        for player in &mut self.players {
            if player.active_conversation_area.is_none()
                && area
                    .bounding_box
                    .contains(player.location.x, player.location.y)
            {
                area.occupants.push(player.id.clone());
                player.active_conversation_area = Some(area.label.clone());
            }
        }

        tracing::info!(
            town_id = %self.town_id,
            label = %area.label,
            occupants = area.occupants.len(),
            "conversation area created"
        );
        self.conversation_areas.push(area.clone());
        self.subscribers
            .notify(|l| l.on_conversation_area_updated(&area));
        Ok(())
    }

    /// Updates a player's location and resolves area membership.
    ///
    /// The stored location is overwritten unconditionally; membership is
    /// then resolved purely from the location's `conversation_label`
    /// field (the label the client asserts), never by recomputing
    /// geometric containment:
    ///
    /// - label absent, no current area: nothing;
    /// - label absent, had an area: leave it (the area is destroyed if
    ///   that emptied it);
    /// - label present and different: leave the old area first, then
    ///   join the named area if it is active. A label naming no active
    ///   area is a defined no-op: the player ends unaffiliated;
    /// - label present and unchanged: nothing.
    ///
    /// Removal events fire strictly before the insertion event, and
    /// exactly one `on_player_moved` fires last, regardless of how many
    /// (0, 1, or 2) area-lifecycle events accompanied it.
    ///
    /// # Errors
    /// [`TownError::UnknownPlayer`] if the id is not tracked (no events).
    pub fn move_player(
        &mut self,
        player_id: &PlayerId,
        location: PlayerLocation,
    ) -> Result<(), TownError> {
        self.ensure_live()?;

        let idx = self
            .players
            .iter()
            .position(|p| &p.id == player_id)
            .ok_or_else(|| TownError::UnknownPlayer(player_id.clone()))?;

        let previous = self.players[idx].active_conversation_area.clone();
        let asserted = location.conversation_label.clone();
        self.players[idx].location = location;

        match (asserted, previous) {
            (None, None) => {}
            (None, Some(prev)) => {
                self.players[idx].active_conversation_area = None;
                let id = self.players[idx].id.clone();
                self.remove_from_area(&id, &prev);
            }
            (Some(next), previous) => {
                if previous.as_deref() != Some(next.as_str()) {
                    if let Some(prev) = previous {
                        self.players[idx].active_conversation_area = None;
                        let id = self.players[idx].id.clone();
                        self.remove_from_area(&id, &prev);
                    }
                    self.add_to_area(idx, &next);
                }
            }
        }

        let moved = self.players[idx].clone();
        tracing::debug!(town_id = %self.town_id, player_id = %moved.id, "player moved");
        self.subscribers.notify(|l| l.on_player_moved(&moved));
        Ok(())
    }

    // -- Internal membership helpers ---------------------------------------

    /// Deletes a player from an area's occupant list. An emptied area is
    /// destroyed (`on_conversation_area_destroyed`, dropped from the
    /// live list); otherwise the shorter list is announced with
    /// `on_conversation_area_updated`.
    fn remove_from_area(&mut self, player_id: &PlayerId, label: &str) {
        let Some(idx) = self
            .conversation_areas
            .iter()
            .position(|a| a.label == label)
        else {
            return;
        };

        self.conversation_areas[idx].remove_occupant(player_id);
        if self.conversation_areas[idx].is_empty() {
            let area = self.conversation_areas.remove(idx);
            tracing::info!(
                town_id = %self.town_id,
                label = %area.label,
                "conversation area destroyed"
            );
            self.subscribers
                .notify(|l| l.on_conversation_area_destroyed(&area));
        } else {
            let area = self.conversation_areas[idx].clone();
            self.subscribers
                .notify(|l| l.on_conversation_area_updated(&area));
        }
    }

    /// Appends a player to the area with the given label and points the
    /// player's reference at it, announcing the longer occupant list.
    /// If no active area carries the label the player is left
    /// unaffiliated.
    fn add_to_area(&mut self, player_idx: usize, label: &str) {
        let Some(area_idx) = self
            .conversation_areas
            .iter()
            .position(|a| a.label == label)
        else {
            return;
        };

        let player_id = self.players[player_idx].id.clone();
        self.conversation_areas[area_idx].occupants.push(player_id);
        self.players[player_idx].active_conversation_area = Some(label.to_string());

        let area = self.conversation_areas[area_idx].clone();
        self.subscribers
            .notify(|l| l.on_conversation_area_updated(&area));
    }

    fn ensure_live(&self) -> Result<(), TownError> {
        if self.destroyed {
            Err(TownError::TownDestroyed(self.town_id.clone()))
        } else {
            Ok(())
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
