use smallvec::SmallVec;

use crate::foundation::core::{Rect, Section};

/// Host contract for reading live layout measurements.
///
/// Freshness contract: the director reads these at the start of every
/// update pass and never caches across passes, so each call must reflect
/// the viewport as it is now.
pub trait Metrics {
    /// Viewport height in pixels.
    fn viewport_height(&self) -> f64;
    /// Vertical scroll offset in pixels from the document top.
    fn scroll_y(&self) -> f64;
    /// Bounding rect of a section in viewport coordinates, or `None`
    /// when the page does not render it.
    fn section_rect(&self, section: Section) -> Option<Rect>;
    /// Natural pixel width of each word rest, in script word order.
    fn word_widths(&self) -> SmallVec<[f64; 8]>;
}
