use crate::animation::ease::Ease;
use crate::foundation::core::Progress;

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A window over scroll progress driving one eased motion.
///
/// Inside `[start, end]` the window yields its eased local fraction;
/// outside it clamps to 0 or 1. A degenerate window (`end <= start`)
/// collapses to a step at `start`.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Progress at which the motion starts.
    pub start: f64,
    /// Progress at which the motion completes.
    pub end: f64,
    /// Easing applied to the local fraction.
    #[serde(default)]
    pub ease: Ease,
}

impl Segment {
    /// Create a window with the given bounds and easing.
    pub fn new(start: f64, end: f64, ease: Ease) -> Self {
        Self { start, end, ease }
    }

    /// Window length in progress units.
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Eased local fraction of `p` through this window, in `[0, 1]`.
    pub fn fraction(self, p: Progress) -> f64 {
        let span = self.span();
        if !(span > 0.0) || !span.is_finite() {
            // Degenerate window: step at `start`.
            return if p.0 >= self.start { 1.0 } else { 0.0 };
        }
        self.ease.apply(((p.0 - self.start) / span).clamp(0.0, 1.0))
    }

    /// Interpolate `from..to` by the eased fraction of `p`.
    pub fn sample<T: Lerp>(self, p: Progress, from: &T, to: &T) -> T {
        T::lerp(from, to, self.fraction(p))
    }
}

/// Per-item offsets added to a shared threshold so a run of items
/// activates sequentially rather than simultaneously.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    /// Threshold for the first item.
    pub base: f64,
    /// Additional threshold per subsequent item.
    pub stride: f64,
}

impl Stagger {
    /// Activation threshold for item `index`.
    pub fn threshold(self, index: usize) -> f64 {
        self.base + index as f64 * self.stride
    }

    /// Whether item `index` is active at progress `p` (inclusive at the
    /// threshold itself).
    pub fn active(self, index: usize, p: Progress) -> bool {
        p.0 >= self.threshold(index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/segment.rs"]
mod tests;
