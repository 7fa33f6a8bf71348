//! Integration tests driving a town through its actor, the way the
//! transport layer does in production: commands in through a
//! [`TownHandle`], events out through a subscribed listener.

use std::sync::{Arc, Mutex};

use plaza_protocol::{BoundingBox, Player, PlayerId, PlayerLocation, TownId};
use plaza_session::{SessionError, VideoCredentialProvider};
use plaza_town::{ConversationArea, TownConfig, TownError, TownListener, spawn_town};

// =========================================================================
// Test doubles
// =========================================================================

/// Issues canned credentials without any network.
struct StubVideo;

impl VideoCredentialProvider for StubVideo {
    async fn issue_credential(
        &self,
        _town_id: &TownId,
        player_id: &PlayerId,
    ) -> Result<String, SessionError> {
        Ok(format!("video-{player_id}"))
    }
}

/// Refuses every request, for the transactional-admission path.
struct DenyVideo;

impl VideoCredentialProvider for DenyVideo {
    async fn issue_credential(
        &self,
        _town_id: &TownId,
        _player_id: &PlayerId,
    ) -> Result<String, SessionError> {
        Err(SessionError::CredentialDenied("provider down".into()))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Joined(PlayerId),
    Moved(PlayerId),
    Disconnected(PlayerId),
    AreaUpdated { label: String, occupants: Vec<PlayerId> },
    AreaDestroyed(String),
    TownDestroyed,
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl TownListener for Recorder {
    fn on_player_joined(&self, player: &Player) {
        self.events.lock().unwrap().push(Event::Joined(player.id.clone()));
    }
    fn on_player_moved(&self, player: &Player) {
        self.events.lock().unwrap().push(Event::Moved(player.id.clone()));
    }
    fn on_player_disconnected(&self, player: &Player) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Disconnected(player.id.clone()));
    }
    fn on_conversation_area_updated(&self, area: &ConversationArea) {
        self.events.lock().unwrap().push(Event::AreaUpdated {
            label: area.label.clone(),
            occupants: area.occupants.clone(),
        });
    }
    fn on_conversation_area_destroyed(&self, area: &ConversationArea) {
        self.events
            .lock()
            .unwrap()
            .push(Event::AreaDestroyed(area.label.clone()));
    }
    fn on_town_destroyed(&self) {
        self.events.lock().unwrap().push(Event::TownDestroyed);
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn pid(id: &str) -> PlayerId {
    PlayerId::from(id)
}

fn player_at(id: &str, x: f64, y: f64) -> Player {
    let mut p = Player::new(pid(id), id);
    p.location = PlayerLocation::at(x, y);
    p
}

fn box_5x5(x: f64, y: f64) -> BoundingBox {
    BoundingBox::new(x, y, 5.0, 5.0)
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_full_lifecycle_join_converse_leave() {
    let town = spawn_town(TownConfig::new("Integration Town", true), StubVideo);
    let recorder = Arc::new(Recorder::default());
    town.subscribe(Arc::clone(&recorder) as Arc<dyn TownListener>)
        .await
        .unwrap();

    // Two players join.
    let s1 = town.admit(player_at("p1", 0.0, 0.0)).await.unwrap();
    let s2 = town.admit(player_at("p2", 0.0, 0.0)).await.unwrap();
    assert_ne!(s1.session_token, s2.session_token);

    // A conversation area opens and both walk in.
    town.create_area(ConversationArea::new("L1", "tea", box_5x5(10.0, 10.0)))
        .await
        .unwrap();
    town.move_player(pid("p1"), PlayerLocation::in_area(10.0, 10.0, "L1"))
        .await
        .unwrap();
    town.move_player(pid("p2"), PlayerLocation::in_area(11.0, 11.0, "L1"))
        .await
        .unwrap();

    // p1 walks out; p2 disconnects; the area dies with them.
    town.move_player(pid("p1"), PlayerLocation::at(50.0, 50.0))
        .await
        .unwrap();
    town.evict(s2).await.unwrap();

    assert_eq!(
        recorder.take(),
        vec![
            Event::Joined(pid("p1")),
            Event::Joined(pid("p2")),
            Event::AreaUpdated { label: "L1".into(), occupants: vec![] },
            Event::AreaUpdated { label: "L1".into(), occupants: vec![pid("p1")] },
            Event::Moved(pid("p1")),
            Event::AreaUpdated {
                label: "L1".into(),
                occupants: vec![pid("p1"), pid("p2")],
            },
            Event::Moved(pid("p2")),
            Event::AreaUpdated { label: "L1".into(), occupants: vec![pid("p2")] },
            Event::Moved(pid("p1")),
            Event::AreaDestroyed("L1".into()),
            Event::Disconnected(pid("p2")),
        ]
    );
}

#[tokio::test]
async fn test_session_tokens_resolve_through_the_actor() {
    let town = spawn_town(TownConfig::new("Tokens", false), StubVideo);

    let session = town.admit(player_at("p1", 0.0, 0.0)).await.unwrap();

    let found = town
        .lookup_session(session.session_token.clone())
        .await
        .unwrap()
        .expect("live token should resolve");
    assert_eq!(found.player_id, pid("p1"));
    assert_eq!(found.video_token, "video-p1");

    assert!(town.lookup_session("bogus").await.unwrap().is_none());
}

#[tokio::test]
async fn test_area_rules_hold_across_the_channel() {
    let town = spawn_town(TownConfig::new("Geometry", false), StubVideo);

    // Edge-touching succeeds, interior overlap fails.
    town.create_area(ConversationArea::new("L1", "T", box_5x5(10.0, 10.0)))
        .await
        .unwrap();
    town.create_area(ConversationArea::new("L2", "T2", box_5x5(10.0, 15.0)))
        .await
        .unwrap();

    let overlap = town
        .create_area(ConversationArea::new("L3", "T3", box_5x5(14.0, 14.0)))
        .await;
    assert!(matches!(overlap, Err(TownError::RegionOverlap(l)) if l == "L3"));

    let empty_topic = town
        .create_area(ConversationArea::new("L4", "", box_5x5(30.0, 30.0)))
        .await;
    assert!(matches!(empty_topic, Err(TownError::EmptyTopic)));

    let duplicate = town
        .create_area(ConversationArea::new("L1", "again", box_5x5(30.0, 30.0)))
        .await;
    assert!(matches!(duplicate, Err(TownError::DuplicateLabel(l)) if l == "L1"));
}

#[tokio::test]
async fn test_failed_credential_rolls_admission_back() {
    let town = spawn_town(TownConfig::new("Denied", false), DenyVideo);
    let recorder = Arc::new(Recorder::default());
    town.subscribe(Arc::clone(&recorder) as Arc<dyn TownListener>)
        .await
        .unwrap();

    let result = town.admit(player_at("p1", 0.0, 0.0)).await;
    assert!(matches!(result, Err(TownError::Credential(_))));

    // Nothing registered: moving the would-be player is unknown.
    let moved = town.move_player(pid("p1"), PlayerLocation::at(1.0, 1.0)).await;
    assert!(matches!(moved, Err(TownError::UnknownPlayer(_))));
    assert!(recorder.take().is_empty());
}

#[tokio::test]
async fn test_destroyed_town_rejects_late_commands() {
    let town = spawn_town(TownConfig::new("Doomed", false), StubVideo);
    let recorder = Arc::new(Recorder::default());
    town.subscribe(Arc::clone(&recorder) as Arc<dyn TownListener>)
        .await
        .unwrap();
    town.admit(player_at("p1", 0.0, 0.0)).await.unwrap();
    recorder.take();

    town.disconnect_all().await.unwrap();
    assert_eq!(recorder.take(), vec![Event::TownDestroyed]);

    // The actor stays responsive so late callers get a definite answer.
    let late = town.admit(player_at("p2", 0.0, 0.0)).await;
    assert!(matches!(late, Err(TownError::TownDestroyed(_))));
}

#[tokio::test]
async fn test_handles_are_cloneable_and_share_one_town() {
    let town = spawn_town(TownConfig::new("Shared", false), StubVideo);
    let clone = town.clone();
    assert_eq!(town.town_id(), clone.town_id());

    let session = town.admit(player_at("p1", 0.0, 0.0)).await.unwrap();

    // The clone observes state written through the original.
    let found = clone
        .lookup_session(session.session_token.clone())
        .await
        .unwrap();
    assert!(found.is_some());
}
