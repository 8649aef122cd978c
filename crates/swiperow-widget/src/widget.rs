//! The swipe row widget.

use swiperow_core::{RestPosition, SwipeGeometry, SwipeMachine};

use crate::animation::{AnimationSpec, OffsetTween};
use crate::pointer::{DragTracker, DragUpdate, PointerEventKind};
use crate::primitives::{Point, Rect};

/// Where the three regions land for the current visual offset, in row-local
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionFrames {
    pub left: Rect,
    pub content: Rect,
    pub right: Rect,
}

type RegionPainter<C> = Box<dyn FnMut(&mut C, Rect)>;

/// A swipeable row with a left and a right action panel behind the content.
///
/// Generic over the host's canvas type `C`; the three regions are painter
/// closures invoked with the frame each region occupies. The host wires four
/// things up:
///
/// - [`set_container_width`](Self::set_container_width) from its layout pass,
/// - [`handle_pointer`](Self::handle_pointer) from its input events,
/// - [`on_frame`](Self::on_frame) from its render loop while
///   [`needs_frame`](Self::needs_frame) is true,
/// - an [`on_invalidate`](Self::on_invalidate) callback to schedule redraws.
///
/// Each row owns an independent state machine; rows share nothing.
pub struct SwipeRow<C> {
    geometry: SwipeGeometry,
    machine: SwipeMachine,
    tracker: DragTracker,
    snap: Option<OffsetTween>,
    snap_spec: AnimationSpec,
    visual_offset: f32,
    content: RegionPainter<C>,
    left: RegionPainter<C>,
    right: RegionPainter<C>,
    invalidate: Box<dyn FnMut()>,
}

impl<C> SwipeRow<C> {
    /// Creates a row of fixed `item_height` with the three injected region
    /// painters. The container width starts at zero and must be supplied by
    /// the host's first layout pass before the row reacts to drags.
    pub fn new(
        item_height: f32,
        content: impl FnMut(&mut C, Rect) + 'static,
        left: impl FnMut(&mut C, Rect) + 'static,
        right: impl FnMut(&mut C, Rect) + 'static,
    ) -> Self {
        Self {
            geometry: SwipeGeometry::new(0.0, item_height),
            machine: SwipeMachine::new(),
            tracker: DragTracker::new(),
            snap: None,
            snap_spec: AnimationSpec::default(),
            visual_offset: 0.0,
            content: Box::new(content),
            left: Box::new(left),
            right: Box::new(right),
            invalidate: Box::new(|| {}),
        }
    }

    /// Registers the redraw callback, fired whenever the visual offset
    /// changes.
    pub fn on_invalidate(mut self, callback: impl FnMut() + 'static) -> Self {
        self.invalidate = Box::new(callback);
        self
    }

    /// Overrides the snap animation (duration/easing).
    pub fn with_snap_spec(mut self, spec: AnimationSpec) -> Self {
        self.snap_spec = spec;
        self
    }

    pub fn geometry(&self) -> &SwipeGeometry {
        &self.geometry
    }

    pub fn rest_position(&self) -> RestPosition {
        self.machine.rest_position()
    }

    pub fn machine(&self) -> &SwipeMachine {
        &self.machine
    }

    /// The offset currently on screen: the live drag offset during a
    /// gesture, the tweened offset during a snap, the anchor at rest.
    pub fn visual_offset(&self) -> f32 {
        self.visual_offset
    }

    /// Row bounds in row-local coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.geometry.container_width(),
            self.geometry.item_height(),
        )
    }

    /// Hook for the host's geometry provider. Safe to call between gestures;
    /// a resize landing mid-gesture leaves the machine untouched and the
    /// gesture resolves against the new geometry on its end event.
    pub fn set_container_width(&mut self, container_width: f32) {
        self.geometry.resize(container_width);
        (self.invalidate)();
    }

    /// Feeds one pointer event, in row-local coordinates.
    ///
    /// A `Down` outside the row bounds is ignored so neighbouring widgets can
    /// claim it; once a gesture is armed, moves are tracked wherever the
    /// pointer goes, matching how drag gestures keep ownership after press.
    pub fn handle_pointer(&mut self, kind: PointerEventKind, position: Point) {
        if kind == PointerEventKind::Down && !self.bounds().contains(position) {
            return;
        }

        match self.tracker.on_event(kind, position) {
            DragUpdate::Changed(translation) => {
                // The finger overrides any snap still in flight.
                self.snap = None;
                self.machine.drag_changed(&self.geometry, translation);
                self.visual_offset = self.machine.offset();
                (self.invalidate)();
            }
            DragUpdate::Ended => {
                let from = self.visual_offset;
                let rest = self.machine.drag_ended(&self.geometry);
                self.snap = Some(OffsetTween::new(
                    from,
                    self.machine.offset(),
                    self.snap_spec,
                ));
                log::debug!(
                    "snap from {from} to {} ({rest:?})",
                    self.machine.offset()
                );
                (self.invalidate)();
            }
            DragUpdate::None => {}
        }
    }

    /// True while a snap animation still needs frames.
    pub fn needs_frame(&self) -> bool {
        self.snap.is_some()
    }

    /// Advances the snap animation to the given frame time. Returns true if
    /// another frame should be scheduled.
    pub fn on_frame(&mut self, now_nanos: u64) -> bool {
        let Some(tween) = self.snap.as_mut() else {
            return false;
        };

        self.visual_offset = tween.tick(now_nanos);
        let finished = tween.is_finished();
        if finished {
            self.snap = None;
        }
        (self.invalidate)();
        !finished
    }

    /// Computes the frames of the three regions for the current visual
    /// offset: panels of `anchor_width` on either side of a full-width
    /// content strip, the whole band translated by `-anchor_width + offset`.
    pub fn layout(&self) -> RegionFrames {
        let anchor_width = self.geometry.anchor_width();
        let container_width = self.geometry.container_width();
        let height = self.geometry.item_height();
        let band_x = -anchor_width + self.visual_offset;

        RegionFrames {
            left: Rect::new(band_x, 0.0, anchor_width, height),
            content: Rect::new(band_x + anchor_width, 0.0, container_width, height),
            right: Rect::new(
                band_x + anchor_width + container_width,
                0.0,
                anchor_width,
                height,
            ),
        }
    }

    /// Paints the three regions. Content first, then the panels, which sit
    /// above it where edges meet. Clipping to the row bounds is the canvas's
    /// contract.
    pub fn paint(&mut self, canvas: &mut C) {
        let frames = self.layout();
        (self.content)(canvas, frames.content);
        (self.left)(canvas, frames.left);
        (self.right)(canvas, frames.right);
    }
}

#[cfg(test)]
#[path = "tests/widget_tests.rs"]
mod tests;
