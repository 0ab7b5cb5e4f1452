use smallvec::SmallVec;

use crate::{choreography::model::FormtScript, foundation::core::Progress};

#[derive(Clone, Debug, serde::Serialize)]
/// Resolved FORMT section state for one progress value.
pub struct FormtFrame {
    /// Progress the frame was evaluated at.
    pub progress: Progress,
    /// Letter row gap in viewport-width units.
    pub gap_vw: f64,
    /// Whether the tagline is visible.
    pub tagline_visible: bool,
    /// Whether the mission text is visible.
    pub mission_visible: bool,
    /// Per-word reveal state, aligned with the script's word order.
    pub words: SmallVec<[WordFrame; 5]>,
    /// Per-silhouette activation, aligned with the script's order.
    pub silhouettes: SmallVec<[bool; 4]>,
    /// Whether word selection is currently allowed.
    pub selection_open: bool,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Reveal state for one word's expanding rest.
pub struct WordFrame {
    /// Width limit for the rest of the word, in pixels.
    pub max_width_px: f64,
    /// Rest opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether the word counts as fully revealed.
    pub revealed: bool,
    /// Whether the word's selection arrow is shown.
    pub arrow_visible: bool,
}

/// Map FORMT progress and measured word widths to a [`FormtFrame`].
///
/// `word_widths` holds each word's natural rest width in pixels, aligned
/// with the script's word order. Missing, non-finite or non-positive
/// entries are treated as zero width, so the word fades without
/// expanding. The mapping is total and pure.
#[tracing::instrument(skip(script, word_widths))]
pub fn eval_formt(script: &FormtScript, progress: Progress, word_widths: &[f64]) -> FormtFrame {
    let p = progress.0;
    let arrow_visible = p > script.arrow_gate;
    let f = script.rest.fraction(progress);
    let words = (0..script.words.len())
        .map(|i| {
            let width = word_widths.get(i).copied().unwrap_or(0.0);
            let width = if width.is_finite() && width > 0.0 {
                width
            } else {
                0.0
            };
            WordFrame {
                max_width_px: width * f,
                opacity: f,
                revealed: f > script.revealed_min,
                arrow_visible,
            }
        })
        .collect();

    let silhouettes = (0..script.silhouettes.len())
        .map(|i| script.stagger.active(i, progress))
        .collect();

    FormtFrame {
        progress,
        gap_vw: script.gap.fraction(progress) * script.max_gap_vw,
        tagline_visible: p >= script.tagline_gate,
        mission_visible: p > script.mission_gate,
        words,
        silhouettes,
        selection_open: p >= script.select_gate,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/formt.rs"]
mod tests;
