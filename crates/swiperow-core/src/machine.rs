//! The drag/snap state machine.
//!
//! The machine is always anchored at one of three resting offsets: closed
//! (0), left panel revealed (+anchor width) or right panel revealed
//! (-anchor width). While a gesture is in progress `offset` deviates freely
//! from `anchor`; the crossing flags decide which anchor the end event snaps
//! to.

use crate::geometry::SwipeGeometry;

/// The three discrete resting positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestPosition {
    Closed,
    /// Left panel exposed by dragging the row to the right.
    LeftRevealed,
    /// Right panel exposed by dragging the row to the left.
    RightRevealed,
}

/// Interprets a stream of drag events and resolves them to a rest position.
///
/// One instance per row; instances share nothing. All inputs are plain
/// numeric deltas, so there is no error path: an absurdly large translation
/// just saturates past the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeMachine {
    offset: f32,
    anchor: f32,
    left_past: bool,
    right_past: bool,
}

impl SwipeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current horizontal translation of the row.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Last settled resting offset; the only state that survives across
    /// gesture sessions.
    pub fn anchor(&self) -> f32 {
        self.anchor
    }

    pub fn left_past(&self) -> bool {
        self.left_past
    }

    pub fn right_past(&self) -> bool {
        self.right_past
    }

    pub fn rest_position(&self) -> RestPosition {
        if self.anchor > 0.0 {
            RestPosition::LeftRevealed
        } else if self.anchor < 0.0 {
            RestPosition::RightRevealed
        } else {
            RestPosition::Closed
        }
    }

    /// Handles a drag update. `translation` is the cumulative horizontal
    /// distance since the gesture started, not a per-event delta.
    ///
    /// The crossing thresholds are asymmetric around the current anchor: from
    /// closed a small drag past `swipe_threshold` counts as a reveal, but an
    /// already revealed panel stays counted as revealed until the drag pulls
    /// it back within `swipe_threshold` of fully closed. That hysteresis
    /// keeps an open panel sticky against small reversals.
    pub fn drag_changed(&mut self, geometry: &SwipeGeometry, translation: f32) {
        let anchor_width = geometry.anchor_width();
        let threshold = geometry.swipe_threshold();

        self.offset = self.anchor + translation;

        if self.anchor > 0.0 {
            self.left_past = self.offset > anchor_width - threshold;
        } else {
            self.left_past = self.offset > threshold;
        }

        if self.anchor < 0.0 {
            self.right_past = self.offset < -anchor_width + threshold;
        } else {
            self.right_past = self.offset < -threshold;
        }

        log::trace!(
            "drag_changed translation={translation} offset={} left_past={} right_past={}",
            self.offset,
            self.left_past,
            self.right_past
        );
    }

    /// Handles the end of a gesture: resolves the anchor from the crossing
    /// flags (right wins over left if both are set) and snaps the offset to
    /// it.
    ///
    /// The flags themselves are left alone. Every drag update recomputes both
    /// before the next gesture can end, and an end event arriving with stale
    /// flags re-resolves the same anchor it resolved last time.
    pub fn drag_ended(&mut self, geometry: &SwipeGeometry) -> RestPosition {
        if self.right_past {
            self.anchor = -geometry.anchor_width();
        } else if self.left_past {
            self.anchor = geometry.anchor_width();
        } else {
            self.anchor = 0.0;
        }
        self.offset = self.anchor;

        let rest = self.rest_position();
        log::debug!("drag_ended anchor={} rest={rest:?}", self.anchor);
        rest
    }
}

#[cfg(test)]
#[path = "tests/machine_tests.rs"]
mod tests;
