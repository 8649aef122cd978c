//! Tween animation for the snap-back offset.
//!
//! The widget never runs its own timer: the host's render loop feeds frame
//! timestamps into [`OffsetTween::tick`] until the tween reports completion.

/// Easing curves for the snap animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    LinearEasing,
    /// Ease out on a cubic curve; decelerates into the anchor.
    EaseOut,
    /// Material-style standard curve, the default for snaps.
    FastOutSlowInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier easing evaluated with Newton-Raphson, falling back to
/// bisection when the derivative degenerates near the curve ends.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            converged = true;
            break;
        }
        let slope = derivative(ax, bx, cx, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    if !converged {
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = fraction;
        for _ in 0..16 {
            let error = sample(ax, bx, cx, t) - fraction;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

/// Duration, easing and optional start delay for a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(250, Easing::FastOutSlowInEasing)
    }
}

/// Interpolates the row offset from a start value to a target anchor.
///
/// The first `tick` pins the start time; subsequent ticks report the eased
/// value for that frame. Once the duration elapses the tween clamps exactly
/// to the target and flags itself finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetTween {
    start: f32,
    target: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl OffsetTween {
    pub fn new(start: f32, target: f32, spec: AnimationSpec) -> Self {
        Self {
            start,
            target,
            spec,
            start_time_nanos: None,
            finished: false,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to the given frame time and return the offset for that frame.
    pub fn tick(&mut self, now_nanos: u64) -> f32 {
        let start_time = *self.start_time_nanos.get_or_insert(now_nanos);
        let elapsed_nanos = now_nanos.saturating_sub(start_time);
        let delay_nanos = self.spec.delay_millis * 1_000_000;

        if elapsed_nanos < delay_nanos {
            return self.start;
        }

        let duration_nanos = (self.spec.duration_millis * 1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear_progress >= 1.0 {
            self.finished = true;
            return self.target;
        }

        let progress = self.spec.easing.transform(linear_progress);
        self.start + (self.target - self.start) * progress
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
