use crate::{
    choreography::model::{FormtScript, MenuScript, ParallaxScript, RevealScript},
    eval::formt::FormtFrame,
    eval::parallax::ParallaxFrame,
    interact::nav::NavMenu,
    interact::reveal::RevealOnce,
    interact::selection::Selection,
    stage::surface::{Surface, Tag},
};

/// Write a resolved hero frame to the surface.
///
/// Exactly one text block carries [`Tag::Active`] after this returns.
pub fn apply_parallax(surface: &mut dyn Surface, script: &ParallaxScript, frame: &ParallaxFrame) {
    for actor in &frame.actors {
        surface.set_offset_x(&actor.target, actor.offset);
        surface.set_opacity(&actor.target, actor.opacity);
    }
    for (i, block) in script.text_blocks.iter().enumerate() {
        surface.set_tag(block, Tag::Active, i == frame.text_phase);
    }
    surface.set_tag(&script.indicator, Tag::Hidden, frame.indicator_hidden);
    surface.set_tag(&script.nav_bar, Tag::Scrolled, frame.nav_scrolled);
}

/// Write a resolved FORMT frame to the surface.
pub fn apply_formt(surface: &mut dyn Surface, script: &FormtScript, frame: &FormtFrame) {
    surface.set_gap_vw(&script.row, frame.gap_vw);
    surface.set_tag(&script.tagline, Tag::Visible, frame.tagline_visible);
    surface.set_tag(&script.mission, Tag::Visible, frame.mission_visible);
    for (word, state) in script.words.iter().zip(&frame.words) {
        surface.set_max_width_px(&word.rest, state.max_width_px);
        surface.set_opacity(&word.rest, state.opacity);
        surface.set_tag(&word.rest, Tag::Revealed, state.revealed);
        surface.set_tag(&word.arrow, Tag::Visible, state.arrow_visible);
    }
    for (target, on) in script.silhouettes.iter().zip(&frame.silhouettes) {
        surface.set_tag(target, Tag::Active, *on);
    }
}

/// Write the selection state to the surface.
///
/// The selected word (if any) carries [`Tag::Active`] and its
/// description is placed into the panel; with no selection the panel is
/// hidden and its previous text left in place for the fade-out.
pub fn apply_selection(surface: &mut dyn Surface, script: &FormtScript, selection: &Selection) {
    let current = selection.current();
    for (i, word) in script.words.iter().enumerate() {
        surface.set_tag(&word.target, Tag::Active, current == Some(i));
    }
    let description = current
        .and_then(|i| script.words.get(i))
        .and_then(|w| w.description.as_deref());
    if let Some(text) = description {
        surface.set_text(&script.panel.text, text);
    }
    surface.set_tag(&script.panel.field, Tag::Visible, description.is_some());
}

/// Write the nav menu state to the surface.
pub fn apply_nav(surface: &mut dyn Surface, script: &MenuScript, menu: &NavMenu) {
    surface.set_tag(&script.hamburger, Tag::Active, menu.is_open());
    surface.set_tag(&script.links, Tag::Open, menu.is_open());
}

/// Write the one-shot reveal state to the surface.
pub fn apply_reveal(surface: &mut dyn Surface, script: &RevealScript, reveal: &RevealOnce) {
    surface.set_tag(&script.target, Tag::Revealed, reveal.is_revealed());
}

#[cfg(test)]
#[path = "../../tests/unit/stage/apply.rs"]
mod tests;
