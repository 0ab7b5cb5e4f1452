use std::collections::{BTreeMap, BTreeSet};

use smallvec::SmallVec;

use crate::{
    foundation::core::{Rect, Section},
    stage::metrics::Metrics,
    stage::surface::{Surface, Tag},
};

/// Recorded visual state of one target.
///
/// Every field starts unset and holds the last written value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TargetRecord {
    /// Last written horizontal offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    /// Last written opacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Last written letter gap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_vw: Option<f64>,
    /// Last written width limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width_px: Option<f64>,
    /// Last written text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Tags currently on.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<Tag>,
}

#[derive(Clone, Copy, Debug)]
struct Placement {
    /// Section top in document space.
    top: f64,
    height: f64,
}

/// In-memory host for tests and headless runs.
///
/// Records every surface write per target and serves scripted layout
/// measurements. Targets are implicitly present, created on first
/// write; targets marked absent via [`MemoryStage::mark_absent`] are
/// skipped, matching the surface absence contract.
#[derive(Clone, Debug)]
pub struct MemoryStage {
    viewport_height: f64,
    scroll_y: f64,
    sections: BTreeMap<Section, Placement>,
    word_widths: Vec<f64>,
    targets: BTreeMap<String, TargetRecord>,
    absent: BTreeSet<String>,
}

impl MemoryStage {
    /// Create an empty stage with the given viewport height.
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_y: 0.0,
            sections: BTreeMap::new(),
            word_widths: Vec::new(),
            targets: BTreeMap::new(),
            absent: BTreeSet::new(),
        }
    }

    /// Resize the viewport.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    /// Scroll the document to an absolute offset.
    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    /// Place a section at `top` (document space) with the given height.
    pub fn insert_section(&mut self, section: Section, top: f64, height: f64) {
        self.sections.insert(section, Placement { top, height });
    }

    /// Scroll so that `section` sits at the given progress.
    ///
    /// Values outside `[0, 1]` deliberately over- or under-shoot the
    /// section. Ignored when the section is missing or not scrollable.
    pub fn scroll_section_to(&mut self, section: Section, progress: f64) {
        if let Some(p) = self.sections.get(&section) {
            let scrollable = p.height - self.viewport_height;
            if scrollable > 0.0 {
                self.scroll_y = p.top + progress * scrollable;
            }
        }
    }

    /// Set the measured natural width of each word rest.
    pub fn set_word_widths(&mut self, widths: &[f64]) {
        self.word_widths = widths.to_vec();
    }

    /// Declare a target as not rendered; writes to it are dropped.
    pub fn mark_absent(&mut self, target: impl Into<String>) {
        self.absent.insert(target.into());
    }

    /// Recorded state of one target, if anything was written to it.
    pub fn record(&self, target: &str) -> Option<&TargetRecord> {
        self.targets.get(target)
    }

    /// Whether the target currently carries the tag.
    pub fn has_tag(&self, target: &str, tag: Tag) -> bool {
        self.record(target).is_some_and(|r| r.tags.contains(&tag))
    }

    /// All recorded targets with their state.
    pub fn targets(&self) -> &BTreeMap<String, TargetRecord> {
        &self.targets
    }

    fn target_mut(&mut self, target: &str) -> Option<&mut TargetRecord> {
        if self.absent.contains(target) {
            return None;
        }
        Some(self.targets.entry(target.to_owned()).or_default())
    }
}

impl Surface for MemoryStage {
    fn set_offset_x(&mut self, target: &str, offset: f64) {
        if let Some(rec) = self.target_mut(target) {
            rec.offset_x = Some(offset);
        }
    }

    fn set_opacity(&mut self, target: &str, opacity: f64) {
        if let Some(rec) = self.target_mut(target) {
            rec.opacity = Some(opacity);
        }
    }

    fn set_tag(&mut self, target: &str, tag: Tag, on: bool) {
        if let Some(rec) = self.target_mut(target) {
            if on {
                rec.tags.insert(tag);
            } else {
                rec.tags.remove(&tag);
            }
        }
    }

    fn set_gap_vw(&mut self, target: &str, gap: f64) {
        if let Some(rec) = self.target_mut(target) {
            rec.gap_vw = Some(gap);
        }
    }

    fn set_max_width_px(&mut self, target: &str, width: f64) {
        if let Some(rec) = self.target_mut(target) {
            rec.max_width_px = Some(width);
        }
    }

    fn set_text(&mut self, target: &str, text: &str) {
        if let Some(rec) = self.target_mut(target) {
            rec.text = Some(text.to_owned());
        }
    }
}

impl Metrics for MemoryStage {
    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn section_rect(&self, section: Section) -> Option<Rect> {
        let p = self.sections.get(&section)?;
        let top = p.top - self.scroll_y;
        Some(Rect::new(0.0, top, 0.0, top + p.height))
    }

    fn word_widths(&self) -> SmallVec<[f64; 8]> {
        self.word_widths.iter().copied().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/memory.rs"]
mod tests;
