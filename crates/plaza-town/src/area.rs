//! Conversation areas: labeled regions that group co-located players.

use plaza_protocol::{BoundingBox, PlayerId};
use serde::{Deserialize, Serialize};

/// A labeled rectangular region grouping spatially co-located players
/// into a shared context.
///
/// Lifecycle per area is **absent → active → absent**: an area is
/// created by explicit request and destroyed the instant its occupant
/// list becomes empty. There is no paused or archived state.
///
/// `occupants` is ordered by join time and duplicate-free; the town
/// controller keeps it consistent with each player's
/// `active_conversation_area` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationArea {
    /// Unique label among the town's active areas.
    pub label: String,
    /// What the occupants are talking about. Never empty for an active
    /// area: creation rejects empty topics.
    pub topic: String,
    /// The region this area covers.
    pub bounding_box: BoundingBox,
    /// Ids of the players currently in this area, in join order.
    #[serde(default)]
    pub occupants: Vec<PlayerId>,
}

impl ConversationArea {
    /// Creates an area request with no occupants.
    ///
    /// Occupants are always resolved by the town controller (geometric
    /// scan at creation, label resolution on movement); any occupants a
    /// caller supplies are ignored.
    pub fn new(
        label: impl Into<String>,
        topic: impl Into<String>,
        bounding_box: BoundingBox,
    ) -> Self {
        Self {
            label: label.into(),
            topic: topic.into(),
            bounding_box,
            occupants: Vec::new(),
        }
    }

    /// Removes a player from the occupant list.
    ///
    /// Returns `true` if the player was present.
    pub(crate) fn remove_occupant(&mut self, player_id: &PlayerId) -> bool {
        let before = self.occupants.len();
        self.occupants.retain(|id| id != player_id);
        self.occupants.len() != before
    }

    /// Returns `true` if nobody is left in this area.
    ///
    /// An empty active area is a transient condition: the controller
    /// destroys the area in the same operation that emptied it.
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> ConversationArea {
        ConversationArea::new("L1", "rust", BoundingBox::new(10.0, 10.0, 5.0, 5.0))
    }

    #[test]
    fn test_new_area_starts_empty() {
        let a = area();
        assert!(a.is_empty());
        assert_eq!(a.label, "L1");
        assert_eq!(a.topic, "rust");
    }

    #[test]
    fn test_remove_occupant_present_removes_and_reports_true() {
        let mut a = area();
        a.occupants.push(PlayerId::from("p1"));
        a.occupants.push(PlayerId::from("p2"));

        assert!(a.remove_occupant(&PlayerId::from("p1")));
        assert_eq!(a.occupants, vec![PlayerId::from("p2")]);
    }

    #[test]
    fn test_remove_occupant_absent_reports_false() {
        let mut a = area();
        a.occupants.push(PlayerId::from("p1"));

        assert!(!a.remove_occupant(&PlayerId::from("ghost")));
        assert_eq!(a.occupants.len(), 1);
    }

    #[test]
    fn test_remove_occupant_preserves_join_order_of_rest() {
        let mut a = area();
        for id in ["p1", "p2", "p3"] {
            a.occupants.push(PlayerId::from(id));
        }

        a.remove_occupant(&PlayerId::from("p2"));
        assert_eq!(
            a.occupants,
            vec![PlayerId::from("p1"), PlayerId::from("p3")]
        );
    }

    #[test]
    fn test_area_deserializes_without_occupants_field() {
        // Creation requests from clients usually omit occupants.
        let a: ConversationArea = serde_json::from_str(
            r#"{"label":"L1","topic":"t","bounding_box":{"x":1.0,"y":2.0,"width":3.0,"height":4.0}}"#,
        )
        .unwrap();
        assert!(a.occupants.is_empty());
    }
}
