//! Pure drag/snap logic for a horizontally swipeable row.
//!
//! This crate owns no rendering and no event loop. The host feeds cumulative
//! drag translations into [`SwipeMachine`] and reads the resolved offset and
//! anchor back out; [`SwipeGeometry`] derives the panel width and the snap
//! threshold from the container width.

mod geometry;
mod machine;

pub use geometry::{SwipeGeometry, ANCHOR_FRACTION, THRESHOLD_FRACTION};
pub use machine::{RestPosition, SwipeMachine};
