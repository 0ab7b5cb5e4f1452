use smallvec::SmallVec;

use crate::{
    choreography::model::{ActorRole, ParallaxScript},
    foundation::core::Progress,
};

#[derive(Clone, Debug, serde::Serialize)]
/// Resolved hero section state for one progress value.
pub struct ParallaxFrame {
    /// Progress the frame was evaluated at.
    pub progress: Progress,
    /// Per-actor visual state, in script order.
    pub actors: SmallVec<[ActorState; 4]>,
    /// Index of the active text block.
    pub text_phase: usize,
    /// Whether the scroll indicator is hidden.
    pub indicator_hidden: bool,
    /// Whether the nav bar is in its scrolled state.
    pub nav_scrolled: bool,
}

#[derive(Clone, Debug, serde::Serialize)]
/// One actor's resolved visual state.
pub struct ActorState {
    /// Target the state is written to.
    pub target: String,
    /// Horizontal offset as a signed fraction of the actor's travel
    /// distance: `0` is centered, `1` fully off the exit edge, `-1`
    /// fully off the entry edge.
    pub offset: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Map hero progress and raw scroll offset to a [`ParallaxFrame`].
///
/// The mapping is total and pure: equal inputs always produce equal
/// frames, and every progress in `[0, 1]` resolves without error. At
/// `phase_split` exactly, the early-phase mapping applies; both phases
/// agree there, so the relay is continuous across the handover.
#[tracing::instrument(skip(script))]
pub fn eval_parallax(script: &ParallaxScript, progress: Progress, scroll_y: f64) -> ParallaxFrame {
    let p = progress.0;
    let actors = script
        .actors
        .iter()
        .map(|actor| {
            let (offset, opacity) = eval_actor(script, actor.role, p);
            ActorState {
                target: actor.target.clone(),
                offset,
                opacity,
            }
        })
        .collect();

    ParallaxFrame {
        progress,
        actors,
        text_phase: script.text_breaks.partition_point(|b| p >= *b),
        indicator_hidden: p > script.indicator_fade,
        nav_scrolled: scroll_y > script.nav_scroll_px,
    }
}

fn eval_actor(script: &ParallaxScript, role: ActorRole, p: f64) -> (f64, f64) {
    let split = script.phase_split;
    if p <= split {
        let t = script.ease.apply(p / split);
        match role {
            ActorRole::ExitEarly => (t, 1.0 - t),
            ActorRole::EnterEarly => (1.0 - t, t),
            ActorRole::ExitLate => (0.0, 1.0),
            ActorRole::EnterLate => (-1.0, 0.0),
        }
    } else {
        let t = script.ease.apply((p - split) / (1.0 - split));
        match role {
            ActorRole::ExitEarly => (1.0, 0.0),
            ActorRole::EnterEarly => (0.0, 1.0),
            ActorRole::ExitLate => (-t, 1.0 - t),
            ActorRole::EnterLate => (-(1.0 - t), t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/parallax.rs"]
mod tests;
