//! A horizontally swipeable list row.
//!
//! [`SwipeRow`] wraps the [`swiperow_core`] state machine with everything a
//! host needs to put the row on screen: a pointer-event adapter that turns
//! absolute cursor positions into drag translations, a tween that animates
//! the snap back to an anchor, region layout, and an invalidation callback
//! fired whenever the visual offset changes.
//!
//! The three regions (content, left action, right action) are injected as
//! painter closures over a host-provided canvas type, so the crate stays
//! agnostic of the rendering backend.

mod animation;
mod pointer;
mod primitives;
mod widget;

pub use animation::{AnimationSpec, Easing, OffsetTween};
pub use pointer::{DragTracker, DragUpdate, PointerEventKind};
pub use primitives::{Point, Rect, Size};
pub use widget::{RegionFrames, SwipeRow};

pub use swiperow_core::{RestPosition, SwipeGeometry, SwipeMachine};
