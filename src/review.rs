//! # Review Cards
//!
//! Every matched POI for a brand renders as a card the reviewer has to
//! validate before the importation can move forward. The card set is owned
//! by the page that rendered it; this module only tracks the per-card
//! validation flags and derives the single gate from them.
//!
//! The gate is never stored. Every published value comes from a fresh scan
//! over the current card set.

use std::collections::HashMap;

use crate::page::Surface;

/// Validation flags for one review card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemState {
    pub validated: bool,
    pub content_visible: bool,
}

impl Default for ItemState {
    fn default() -> Self {
        Self {
            validated: false,
            content_visible: true,
        }
    }
}

/// Tracks which cards of the rendered set have been validated.
///
/// Card identity belongs to the page. The board is handed the rendered ids
/// up front and never adds or removes any on its own; unknown ids degrade
/// to silent no-ops since a card may have been removed or not rendered yet.
#[derive(Debug, Default)]
pub struct ReviewBoard {
    items: HashMap<String, ItemState>,
}

impl ReviewBoard {
    pub fn new<I, S>(item_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: item_ids
                .into_iter()
                .map(|id| (id.into(), ItemState::default()))
                .collect(),
        }
    }

    /// Mark a card as reviewed and collapse its detail body, then publish
    /// the recomputed gate. Unknown ids change nothing.
    pub fn validate(&mut self, item_id: &str, surface: &mut dyn Surface) {
        let Some(item) = self.items.get_mut(item_id) else {
            return;
        };

        item.validated = true;
        item.content_visible = false;

        surface.mark_validated(item_id);
        surface.set_content_visible(item_id, false);

        self.recompute_gate(surface);
    }

    pub fn invalidate(&mut self, _item_id: &str) {
        // TODO: needs a product decision on whether un-validating a card
        // restores its detail body before any behavior lands here
    }

    /// True iff every card on the board is validated. An empty board gates
    /// open.
    pub fn all_validated(&self) -> bool {
        self.items.values().all(|item| item.validated)
    }

    /// Scan the card set and push the result at the next-step control.
    pub fn recompute_gate(&self, surface: &mut dyn Surface) -> bool {
        let gate = self.all_validated();

        #[cfg(feature = "verbose")]
        tracing::info!(cards = self.items.len(), gate, "gate recomputed");

        surface.set_next_step_enabled(gate);
        gate
    }

    pub fn item(&self, item_id: &str) -> Option<ItemState> {
        self.items.get(item_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemState, ReviewBoard};
    use crate::page::Surface;

    #[derive(Default)]
    struct RecordingSurface {
        validated: Vec<String>,
        content: Vec<(String, bool)>,
        next_step: Option<bool>,
    }

    impl Surface for RecordingSurface {
        fn mark_validated(&mut self, item_id: &str) {
            self.validated.push(item_id.to_string());
        }

        fn set_content_visible(&mut self, item_id: &str, visible: bool) {
            self.content.push((item_id.to_string(), visible));
        }

        fn set_next_step_enabled(&mut self, enabled: bool) {
            self.next_step = Some(enabled);
        }

        fn set_confirm_enabled(&mut self, _enabled: bool) {}

        fn set_loading_visible(&mut self, _visible: bool) {}
    }

    #[test]
    fn test_gate_progression() {
        let mut board = ReviewBoard::new(["1", "2"]);
        let mut surface = RecordingSurface::default();

        assert!(!board.recompute_gate(&mut surface));
        assert_eq!(surface.next_step, Some(false));

        board.validate("1", &mut surface);
        assert!(!board.all_validated());
        assert_eq!(surface.next_step, Some(false));

        board.validate("2", &mut surface);
        assert!(board.all_validated());
        assert_eq!(surface.next_step, Some(true));
    }

    #[test]
    fn test_validate_collapses_card() {
        let mut board = ReviewBoard::new(["7"]);
        let mut surface = RecordingSurface::default();

        board.validate("7", &mut surface);

        assert_eq!(
            board.item("7"),
            Some(ItemState {
                validated: true,
                content_visible: false,
            })
        );
        assert_eq!(surface.validated, vec!["7".to_string()]);
        assert_eq!(surface.content, vec![("7".to_string(), false)]);
    }

    #[test]
    fn test_empty_board_gates_open() {
        let board = ReviewBoard::new(Vec::<String>::new());
        let mut surface = RecordingSurface::default();

        assert!(board.recompute_gate(&mut surface));
        assert_eq!(surface.next_step, Some(true));
    }

    #[test]
    fn test_unknown_card_is_ignored() {
        let mut board = ReviewBoard::new(["1"]);
        let mut surface = RecordingSurface::default();

        board.validate("missing", &mut surface);

        assert_eq!(board.item("1"), Some(ItemState::default()));
        assert!(!board.all_validated());
        // no recompute either, the page was not touched
        assert_eq!(surface.next_step, None);
        assert!(surface.validated.is_empty());
    }

    #[test]
    fn test_invalidate_is_inert() {
        let mut board = ReviewBoard::new(["1"]);
        let mut surface = RecordingSurface::default();

        board.validate("1", &mut surface);
        board.invalidate("1");

        assert_eq!(
            board.item("1"),
            Some(ItemState {
                validated: true,
                content_visible: false,
            })
        );
    }
}
