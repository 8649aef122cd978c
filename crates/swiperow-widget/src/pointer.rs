//! Adapter from absolute pointer events to drag translations.

use crate::primitives::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// What a pointer event means for the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// Nothing to do (no gesture armed, or a tap that never moved).
    None,
    /// Cumulative horizontal translation since the gesture started.
    Changed(f32),
    /// The gesture finished and the machine should resolve its anchor.
    Ended,
}

/// Tracks one pointer through a gesture session.
///
/// A `Down` arms the tracker and records the origin; every `Move` while armed
/// yields the cumulative horizontal translation from that origin. `Up` and
/// `Cancel` both end the session (the host delivering an end event is the
/// only cancellation concept the row knows about). A `Down`/`Up` pair with no
/// movement in between is a tap and produces no gesture at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    origin_x: Option<f32>,
    moved: bool,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.origin_x.is_some()
    }

    pub fn on_event(&mut self, kind: PointerEventKind, position: Point) -> DragUpdate {
        match kind {
            PointerEventKind::Down => {
                self.origin_x = Some(position.x);
                self.moved = false;
                DragUpdate::None
            }
            PointerEventKind::Move => match self.origin_x {
                Some(origin_x) => {
                    self.moved = true;
                    DragUpdate::Changed(position.x - origin_x)
                }
                None => DragUpdate::None,
            },
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let was_dragging = self.origin_x.take().is_some() && self.moved;
                self.moved = false;
                if was_dragging {
                    DragUpdate::Ended
                } else {
                    DragUpdate::None
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/pointer_tests.rs"]
mod tests;
