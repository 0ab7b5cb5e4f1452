pub use kurbo::Rect;

/// Normalized scroll progress within a section's own scrollable span.
///
/// The value is always in `[0, 1]`: 0 before the section's top reaches the
/// viewport top, 1 once the section has fully scrolled past, clamped in
/// between. Build values through [`Progress::new`] or
/// [`SectionGeometry::progress`]; both normalize out-of-range and
/// non-finite inputs.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Progress(pub f64);

impl Progress {
    /// Create a progress value clamped into `[0, 1]`.
    ///
    /// Non-finite inputs normalize to 0.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }
}

/// Geometry snapshot for one animated section, in viewport coordinates.
///
/// A snapshot is read freshly on every pass; layout can change between
/// passes through resize or content reflow, so snapshots are never cached.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct SectionGeometry {
    /// Section top edge relative to the viewport top (negative once the
    /// section has started scrolling past).
    pub top: f64,
    /// Full section height in pixels.
    pub height: f64,
    /// Current viewport height in pixels.
    pub viewport_height: f64,
}

impl SectionGeometry {
    /// Build a snapshot from the section's bounding box in viewport space.
    pub fn from_rect(rect: Rect, viewport_height: f64) -> Self {
        Self {
            top: rect.y0,
            height: rect.height(),
            viewport_height,
        }
    }

    /// Scroll progress through this section.
    ///
    /// `scrollable = height - viewport_height`; a section no taller than
    /// the viewport has no scrollable span and always reports 0.
    pub fn progress(self) -> Progress {
        let scrollable = self.height - self.viewport_height;
        if !scrollable.is_finite() || scrollable <= 0.0 {
            return Progress(0.0);
        }
        Progress::new(-self.top / scrollable)
    }
}

/// The two independently scrolling animated sections of the page.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Section {
    /// The hero parallax section (actor relay + text phases).
    Hero,
    /// The FORMT section (letter spread, word reveal, silhouettes).
    Formt,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
