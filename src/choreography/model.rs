use crate::{
    animation::ease::Ease,
    animation::segment::{Segment, Stagger},
    foundation::error::{StageError, StageResult},
};

/// The complete scroll choreography for the page.
///
/// A choreography is a pure data model: it names every styled target and
/// carries every threshold the mapping passes use, so it can be
/// serialized and validated independently of any rendering environment.
/// [`Choreography::default`] encodes the production page.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Choreography {
    /// Hero parallax section: actor relay, text phases, indicator, nav.
    pub parallax: ParallaxScript,
    /// FORMT section: letter spread, word reveal, silhouettes, panel.
    pub formt: FormtScript,
    /// Mobile nav menu wiring; absent when the page has no hamburger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuScript>,
    /// One-shot visibility reveal wiring; absent when unused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal: Option<RevealScript>,
}

impl Default for Choreography {
    fn default() -> Self {
        Self {
            parallax: ParallaxScript::default(),
            formt: FormtScript::default(),
            menu: Some(MenuScript::default()),
            reveal: Some(RevealScript::default()),
        }
    }
}

impl Choreography {
    /// Validate every script in this choreography.
    pub fn validate(&self) -> StageResult<()> {
        self.parallax.validate()?;
        self.formt.validate()?;
        if let Some(menu) = &self.menu {
            menu.validate()?;
        }
        if let Some(reveal) = &self.reveal {
            reveal.validate()?;
        }
        Ok(())
    }

    /// Parse a choreography from JSON and validate it.
    pub fn from_json_str(json: &str) -> StageResult<Self> {
        let choreo: Self =
            serde_json::from_str(json).map_err(|e| StageError::serde(e.to_string()))?;
        choreo.validate()?;
        Ok(choreo)
    }

    /// Serialize this choreography to pretty-printed JSON.
    pub fn to_json_string(&self) -> StageResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StageError::serde(e.to_string()))
    }
}

/// Role of one actor in the two-pair crossfade relay.
///
/// The hero scroll span is split in two phases; the early pair crossfades
/// during the first phase while the late pair holds, then the late pair
/// crossfades while the early pair holds its terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ActorRole {
    /// Slides out toward the +1 edge during the early phase.
    ExitEarly,
    /// Slides in from the +1 edge during the early phase.
    EnterEarly,
    /// Holds center through the early phase, exits toward −1 late.
    ExitLate,
    /// Hidden at −1 through the early phase, enters from −1 late.
    EnterLate,
}

/// One visual actor in the hero relay.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ActorDef {
    /// Stable target identifier the actor's offset/opacity is written to.
    pub target: String,
    /// Relay role.
    pub role: ActorRole,
}

/// Script for the hero parallax section.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ParallaxScript {
    /// Actors taking part in the relay.
    pub actors: Vec<ActorDef>,
    /// Progress at which the early pair hands over to the late pair.
    #[serde(default = "default_phase_split")]
    pub phase_split: f64,
    /// Easing applied within each phase.
    #[serde(default)]
    pub ease: Ease,
    /// Text block targets; exactly one carries the `active` tag at a time.
    pub text_blocks: Vec<String>,
    /// Progress break points between consecutive text blocks, strictly
    /// increasing, one fewer than `text_blocks`.
    pub text_breaks: Vec<f64>,
    /// Scroll indicator target (tagged `hidden` once scrolling starts).
    pub indicator: String,
    /// Progress above which the indicator hides.
    #[serde(default = "default_indicator_fade")]
    pub indicator_fade: f64,
    /// Nav bar target (tagged `scrolled` past a raw pixel offset).
    pub nav_bar: String,
    /// Raw vertical scroll offset in pixels beyond which the nav bar is
    /// `scrolled`; independent of section progress.
    #[serde(default = "default_nav_scroll_px")]
    pub nav_scroll_px: f64,
}

impl Default for ParallaxScript {
    fn default() -> Self {
        Self {
            actors: vec![
                ActorDef {
                    target: "img-junge".to_owned(),
                    role: ActorRole::ExitEarly,
                },
                ActorDef {
                    target: "img-mann".to_owned(),
                    role: ActorRole::EnterEarly,
                },
                ActorDef {
                    target: "img-frau".to_owned(),
                    role: ActorRole::ExitLate,
                },
                ActorDef {
                    target: "img-oma".to_owned(),
                    role: ActorRole::EnterLate,
                },
            ],
            phase_split: default_phase_split(),
            ease: Ease::InOutCubic,
            text_blocks: vec![
                "text-phase-0".to_owned(),
                "text-phase-1".to_owned(),
                "text-phase-2".to_owned(),
            ],
            text_breaks: vec![0.2, 0.7],
            indicator: "scroll-indicator".to_owned(),
            indicator_fade: default_indicator_fade(),
            nav_bar: "main-nav".to_owned(),
            nav_scroll_px: default_nav_scroll_px(),
        }
    }
}

impl ParallaxScript {
    /// Validate relay, text-phase and threshold invariants.
    pub fn validate(&self) -> StageResult<()> {
        if self.actors.is_empty() {
            return Err(StageError::validation("parallax needs at least one actor"));
        }
        let mut targets: Vec<&str> = self.actors.iter().map(|a| a.target.as_str()).collect();
        targets.sort_unstable();
        if targets.iter().any(|t| t.is_empty()) {
            return Err(StageError::validation("actor target must be non-empty"));
        }
        if targets.windows(2).any(|w| w[0] == w[1]) {
            return Err(StageError::validation("actor targets must be unique"));
        }
        if !self.phase_split.is_finite() || self.phase_split <= 0.0 || self.phase_split >= 1.0 {
            return Err(StageError::validation("phase_split must be inside (0, 1)"));
        }
        if self.text_blocks.is_empty() {
            return Err(StageError::validation("at least one text block is required"));
        }
        if self.text_blocks.iter().any(|b| b.is_empty()) {
            return Err(StageError::validation("text block targets must be non-empty"));
        }
        if self.text_breaks.len() + 1 != self.text_blocks.len() {
            return Err(StageError::validation(
                "text_breaks must have exactly one entry fewer than text_blocks",
            ));
        }
        for b in &self.text_breaks {
            if !b.is_finite() || *b <= 0.0 || *b >= 1.0 {
                return Err(StageError::validation(
                    "text break points must be inside (0, 1)",
                ));
            }
        }
        if self.text_breaks.windows(2).any(|w| w[0] >= w[1]) {
            return Err(StageError::validation(
                "text break points must be strictly increasing",
            ));
        }
        if self.indicator.is_empty() || self.nav_bar.is_empty() {
            return Err(StageError::validation(
                "indicator and nav_bar targets must be non-empty",
            ));
        }
        if !self.indicator_fade.is_finite() || !(0.0..=1.0).contains(&self.indicator_fade) {
            return Err(StageError::validation("indicator_fade must be in [0, 1]"));
        }
        if !self.nav_scroll_px.is_finite() || self.nav_scroll_px < 0.0 {
            return Err(StageError::validation(
                "nav_scroll_px must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// One revealable word in the FORMT row.
///
/// The leading letter is always visible; the rest of the word expands to
/// its measured natural width as the section scrolls.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct WordDef {
    /// Full word as rendered (used by hosts to bind measurements).
    pub label: String,
    /// Word container target; carries the selection `active` tag.
    pub target: String,
    /// Rest-of-word target; receives max-width, opacity and `revealed`.
    pub rest: String,
    /// Arrow target; tagged `visible` once selection becomes possible.
    pub arrow: String,
    /// Description shown in the shared panel when the word is selected.
    /// Markup-owned data; `None` makes selection of this word a no-op.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Shared description panel targets.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PanelDef {
    /// Panel container target (tagged `visible` while a word is selected).
    pub field: String,
    /// Text target receiving the selected word's description verbatim.
    pub text: String,
}

/// Script for the FORMT reveal section.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FormtScript {
    /// Letter row target whose gap spreads with scroll.
    pub row: String,
    /// Tagline target (visible shortly after the section is entered).
    pub tagline: String,
    /// Mission text target (visible once the row is fully revealed).
    pub mission: String,
    /// The revealable words, in row order.
    pub words: Vec<WordDef>,
    /// Silhouette targets activated with a staggered threshold.
    #[serde(default)]
    pub silhouettes: Vec<String>,
    /// Shared description panel.
    pub panel: PanelDef,
    /// Window over which the row gap grows.
    #[serde(default = "default_gap_segment")]
    pub gap: Segment,
    /// Gap at full spread, in viewport-width units.
    #[serde(default = "default_max_gap_vw")]
    pub max_gap_vw: f64,
    /// Window over which word rests expand and fade in.
    #[serde(default = "default_rest_segment")]
    pub rest: Segment,
    /// Eased reveal fraction above which a word counts as revealed.
    #[serde(default = "default_revealed_min")]
    pub revealed_min: f64,
    /// Progress beyond which word arrows are visible.
    #[serde(default = "default_arrow_gate")]
    pub arrow_gate: f64,
    /// Progress at which the tagline becomes visible.
    #[serde(default = "default_tagline_gate")]
    pub tagline_gate: f64,
    /// Progress beyond which the mission text becomes visible.
    #[serde(default = "default_mission_gate")]
    pub mission_gate: f64,
    /// Progress below which selection is suppressed and the panel forced
    /// hidden.
    #[serde(default = "default_select_gate")]
    pub select_gate: f64,
    /// Staggered silhouette activation thresholds.
    #[serde(default = "default_silhouette_stagger")]
    pub stagger: Stagger,
}

impl Default for FormtScript {
    fn default() -> Self {
        let word = |label: &str, slug: &str| WordDef {
            label: label.to_owned(),
            target: format!("formt-word-{slug}"),
            rest: format!("formt-rest-{slug}"),
            arrow: format!("formt-arrow-{slug}"),
            description: None,
        };
        Self {
            row: "formt-row".to_owned(),
            tagline: "formt-tagline".to_owned(),
            mission: "formt-mission".to_owned(),
            words: vec![
                word("Fitness", "fitness"),
                word("Organisation", "organisation"),
                word("Rehabilitation", "rehabilitation"),
                word("Motivation", "motivation"),
                word("Training", "training"),
            ],
            silhouettes: vec![
                "silhouette-0".to_owned(),
                "silhouette-1".to_owned(),
                "silhouette-2".to_owned(),
            ],
            panel: PanelDef {
                field: "formt-description".to_owned(),
                text: "formt-desc-text".to_owned(),
            },
            gap: default_gap_segment(),
            max_gap_vw: default_max_gap_vw(),
            rest: default_rest_segment(),
            revealed_min: default_revealed_min(),
            arrow_gate: default_arrow_gate(),
            tagline_gate: default_tagline_gate(),
            mission_gate: default_mission_gate(),
            select_gate: default_select_gate(),
            stagger: default_silhouette_stagger(),
        }
    }
}

impl FormtScript {
    /// Validate targets, windows and thresholds.
    pub fn validate(&self) -> StageResult<()> {
        if self.row.is_empty()
            || self.tagline.is_empty()
            || self.mission.is_empty()
            || self.panel.field.is_empty()
            || self.panel.text.is_empty()
        {
            return Err(StageError::validation(
                "formt section targets must be non-empty",
            ));
        }
        if self.words.is_empty() {
            return Err(StageError::validation("formt needs at least one word"));
        }
        let mut ids: Vec<&str> = Vec::new();
        for w in &self.words {
            if w.label.is_empty() {
                return Err(StageError::validation("word label must be non-empty"));
            }
            if w.target.is_empty() || w.rest.is_empty() || w.arrow.is_empty() {
                return Err(StageError::validation("word targets must be non-empty"));
            }
            ids.extend([w.target.as_str(), w.rest.as_str(), w.arrow.as_str()]);
        }
        for s in &self.silhouettes {
            if s.is_empty() {
                return Err(StageError::validation("silhouette target must be non-empty"));
            }
            ids.push(s.as_str());
        }
        ids.sort_unstable();
        if ids.windows(2).any(|w| w[0] == w[1]) {
            return Err(StageError::validation("formt targets must be unique"));
        }
        for (name, seg) in [("gap", self.gap), ("rest", self.rest)] {
            if !seg.start.is_finite() || !seg.end.is_finite() {
                return Err(StageError::validation(format!(
                    "{name} window bounds must be finite"
                )));
            }
            if seg.start < 0.0 || seg.span() <= 0.0 {
                return Err(StageError::validation(format!(
                    "{name} window must start >= 0 and have positive span"
                )));
            }
        }
        if !self.max_gap_vw.is_finite() || self.max_gap_vw < 0.0 {
            return Err(StageError::validation("max_gap_vw must be finite and >= 0"));
        }
        if !self.revealed_min.is_finite() || self.revealed_min <= 0.0 || self.revealed_min >= 1.0 {
            return Err(StageError::validation("revealed_min must be inside (0, 1)"));
        }
        for (name, gate) in [
            ("arrow_gate", self.arrow_gate),
            ("tagline_gate", self.tagline_gate),
            ("mission_gate", self.mission_gate),
            ("select_gate", self.select_gate),
        ] {
            if !gate.is_finite() || !(0.0..=1.0).contains(&gate) {
                return Err(StageError::validation(format!("{name} must be in [0, 1]")));
            }
        }
        if !self.stagger.base.is_finite()
            || !self.stagger.stride.is_finite()
            || self.stagger.base < 0.0
            || self.stagger.stride < 0.0
        {
            return Err(StageError::validation(
                "silhouette stagger must have finite base >= 0 and stride >= 0",
            ));
        }
        Ok(())
    }
}

/// Mobile nav menu targets.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MenuScript {
    /// Hamburger button target (tagged `active` while open).
    pub hamburger: String,
    /// Link container target (tagged `open` while open).
    pub links: String,
}

impl Default for MenuScript {
    fn default() -> Self {
        Self {
            hamburger: "nav-hamburger".to_owned(),
            links: "nav-links".to_owned(),
        }
    }
}

impl MenuScript {
    /// Validate menu targets.
    pub fn validate(&self) -> StageResult<()> {
        if self.hamburger.is_empty() || self.links.is_empty() {
            return Err(StageError::validation("menu targets must be non-empty"));
        }
        Ok(())
    }
}

/// One-shot visibility reveal wiring.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RevealScript {
    /// Target tagged `revealed` once it has been sufficiently visible.
    pub target: String,
    /// Visible fraction at which the reveal latches, in `[0, 1]`.
    #[serde(default = "default_reveal_min_visible")]
    pub min_visible: f64,
}

impl Default for RevealScript {
    fn default() -> Self {
        Self {
            target: "praxis-render".to_owned(),
            min_visible: default_reveal_min_visible(),
        }
    }
}

impl RevealScript {
    /// Validate reveal target and threshold.
    pub fn validate(&self) -> StageResult<()> {
        if self.target.is_empty() {
            return Err(StageError::validation("reveal target must be non-empty"));
        }
        if !self.min_visible.is_finite() || !(0.0..=1.0).contains(&self.min_visible) {
            return Err(StageError::validation("min_visible must be in [0, 1]"));
        }
        Ok(())
    }
}

fn default_phase_split() -> f64 {
    0.5
}

fn default_indicator_fade() -> f64 {
    0.05
}

fn default_nav_scroll_px() -> f64 {
    50.0
}

fn default_gap_segment() -> Segment {
    Segment::new(0.0, 0.6, Ease::InOutCubic)
}

fn default_max_gap_vw() -> f64 {
    2.0
}

fn default_rest_segment() -> Segment {
    Segment::new(0.3, 0.8, Ease::InOutCubic)
}

fn default_revealed_min() -> f64 {
    0.95
}

fn default_arrow_gate() -> f64 {
    0.8
}

fn default_tagline_gate() -> f64 {
    0.02
}

fn default_mission_gate() -> f64 {
    0.85
}

fn default_select_gate() -> f64 {
    0.8
}

fn default_silhouette_stagger() -> Stagger {
    Stagger {
        base: 0.1,
        stride: 0.15,
    }
}

fn default_reveal_min_visible() -> f64 {
    0.3
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/model.rs"]
mod tests;
