//! Container-derived swipe geometry.
//!
//! Both values scale with the container so the row feels the same on narrow
//! and wide layouts: each action panel takes a third of the width, and a drag
//! has to cover a fifteenth of the width before a snap triggers.

/// Fraction of the container width occupied by each action panel.
pub const ANCHOR_FRACTION: f32 = 1.0 / 3.0;

/// Fraction of the container width a drag must cover to trigger a snap.
///
/// Smaller than [`ANCHOR_FRACTION`] by construction, so a revealed panel
/// always sits past its own reveal threshold.
pub const THRESHOLD_FRACTION: f32 = 1.0 / 15.0;

/// Swipe distances derived from the container width.
///
/// Recomputed via [`resize`](SwipeGeometry::resize) whenever the container
/// changes (e.g. an orientation change between gestures). A non-positive
/// width zeroes both derived values, which makes every threshold comparison
/// fail and keeps the row closed until the first real layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGeometry {
    container_width: f32,
    anchor_width: f32,
    swipe_threshold: f32,
    item_height: f32,
}

impl SwipeGeometry {
    pub fn new(container_width: f32, item_height: f32) -> Self {
        let mut geometry = Self {
            container_width: 0.0,
            anchor_width: 0.0,
            swipe_threshold: 0.0,
            item_height,
        };
        geometry.resize(container_width);
        geometry
    }

    /// Re-derives the panel width and snap threshold for a new container
    /// width. Machine state is not touched here; a gesture in flight resolves
    /// against the new values on its end event.
    pub fn resize(&mut self, container_width: f32) {
        if container_width > 0.0 {
            self.container_width = container_width;
            self.anchor_width = container_width * ANCHOR_FRACTION;
            self.swipe_threshold = container_width * THRESHOLD_FRACTION;
        } else {
            self.container_width = 0.0;
            self.anchor_width = 0.0;
            self.swipe_threshold = 0.0;
        }
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Width of each action panel, and the magnitude of the revealed anchors.
    pub fn anchor_width(&self) -> f32 {
        self.anchor_width
    }

    /// Drag distance that flips a crossing flag from the closed position.
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
