/// Boolean presentation states a target can carry.
///
/// Tags are the on/off half of the visual contract: hosts map them to
/// style hooks while numeric state flows through the dedicated setters.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Tag {
    /// The target is the currently active one of its group.
    Active,
    /// The target is shown.
    Visible,
    /// The target is suppressed.
    Hidden,
    /// The target has completed its reveal.
    Revealed,
    /// The target reflects a scrolled-away viewport.
    Scrolled,
    /// The target is expanded open.
    Open,
}

impl Tag {
    /// Stable lowercase name, usable directly as a style hook.
    pub fn as_class(self) -> &'static str {
        match self {
            Tag::Active => "active",
            Tag::Visible => "visible",
            Tag::Hidden => "hidden",
            Tag::Revealed => "revealed",
            Tag::Scrolled => "scrolled",
            Tag::Open => "open",
        }
    }
}

/// Host contract for writing resolved visual state to named targets.
///
/// Absence contract: a target the host does not render is silently
/// skipped, so one choreography can drive page variants that omit
/// elements. Setters are idempotent; writing an unchanged value is
/// always safe.
pub trait Surface {
    /// Set a target's horizontal offset as a signed travel fraction,
    /// `0` centered, `1` fully off the exit edge, `-1` fully off the
    /// entry edge.
    fn set_offset_x(&mut self, target: &str, offset: f64);
    /// Set a target's opacity in `[0, 1]`.
    fn set_opacity(&mut self, target: &str, opacity: f64);
    /// Turn a presentation tag on or off.
    fn set_tag(&mut self, target: &str, tag: Tag, on: bool);
    /// Set a row target's letter gap, in viewport-width units.
    fn set_gap_vw(&mut self, target: &str, gap: f64);
    /// Limit a target's width, in pixels.
    fn set_max_width_px(&mut self, target: &str, width: f64);
    /// Replace a target's text content verbatim.
    fn set_text(&mut self, target: &str, text: &str);
}

#[cfg(test)]
#[path = "../../tests/unit/stage/surface.rs"]
mod tests;
