use crate::{
    choreography::model::Choreography,
    eval::formt::eval_formt,
    eval::parallax::eval_parallax,
    foundation::core::{Section, SectionGeometry},
    foundation::error::StageResult,
    interact::nav::NavMenu,
    interact::reveal::RevealOnce,
    interact::selection::Selection,
    schedule::frame::PassScheduler,
    stage::apply::{apply_formt, apply_nav, apply_parallax, apply_reveal, apply_selection},
    stage::metrics::Metrics,
    stage::surface::Surface,
};

/// Drives one choreography against one host.
///
/// The director owns all interaction state (selection, menu, reveal
/// latch) and the pass scheduler. Scroll and resize notifications are
/// coalesced: the host calls [`ScrollDirector::notify_scroll`] or
/// [`ScrollDirector::notify_resize`] as events arrive, schedules a tick
/// whenever one returns `true`, and claims the pass on that tick with
/// [`ScrollDirector::run_pending`]. Interaction events apply to the
/// surface synchronously.
///
/// Every pass reads geometry fresh from the host, so passes are safe to
/// run at any time; a pass with unchanged inputs rewrites the same
/// state.
pub struct ScrollDirector<H> {
    choreography: Choreography,
    scheduler: PassScheduler,
    selection: Selection,
    menu: NavMenu,
    reveal: Option<RevealOnce>,
    host: H,
}

impl<H: Metrics + Surface> ScrollDirector<H> {
    /// Validate the choreography and run the initial update pass, so the
    /// surface matches the current scroll position before any event.
    pub fn new(choreography: Choreography, host: H) -> StageResult<Self> {
        choreography.validate()?;
        let reveal = choreography
            .reveal
            .as_ref()
            .map(|r| RevealOnce::new(r.min_visible));
        let mut director = Self {
            choreography,
            scheduler: PassScheduler::new(),
            selection: Selection::new(),
            menu: NavMenu::new(),
            reveal,
            host,
        };
        director.run_pass();
        Ok(director)
    }

    /// Note a scroll position change. Returns `true` when the caller
    /// should schedule a tick.
    pub fn notify_scroll(&mut self) -> bool {
        self.scheduler.request_pass()
    }

    /// Note a viewport size change. Returns `true` when the caller
    /// should schedule a tick.
    pub fn notify_resize(&mut self) -> bool {
        self.scheduler.request_pass()
    }

    /// Claim and run the pending update pass, if any.
    ///
    /// Returns whether a pass ran. All notifications since the last
    /// pass collapse into this single run.
    #[tracing::instrument(skip(self))]
    pub fn run_pending(&mut self) -> bool {
        if self.scheduler.drain().is_none() {
            return false;
        }
        self.run_pass();
        true
    }

    /// Toggle selection of the word at `index`, honoring the section
    /// gate. Returns `true` when the selection changed.
    pub fn select_word(&mut self, index: usize) -> bool {
        let open = self.selection_open();
        let changed = self
            .selection
            .select(&self.choreography.formt, index, open);
        if changed {
            apply_selection(&mut self.host, &self.choreography.formt, &self.selection);
        }
        changed
    }

    /// Clear the word selection. Returns `true` when one was cleared.
    pub fn dismiss_selection(&mut self) -> bool {
        let changed = self.selection.dismiss();
        if changed {
            apply_selection(&mut self.host, &self.choreography.formt, &self.selection);
        }
        changed
    }

    /// Toggle the nav menu and return its new state. A choreography
    /// without menu wiring ignores this.
    pub fn toggle_menu(&mut self) -> bool {
        let Some(script) = &self.choreography.menu else {
            return false;
        };
        let open = self.menu.toggle();
        apply_nav(&mut self.host, script, &self.menu);
        open
    }

    /// Close the nav menu after a link was activated. Returns `true`
    /// when it was open.
    pub fn menu_link_activated(&mut self) -> bool {
        let Some(script) = &self.choreography.menu else {
            return false;
        };
        let was_open = self.menu.close();
        if was_open {
            apply_nav(&mut self.host, script, &self.menu);
        }
        was_open
    }

    /// Feed an observed visible fraction of the reveal target. Returns
    /// `true` when this observation fired the latch.
    pub fn observe_reveal(&mut self, visible_fraction: f64) -> bool {
        let (Some(script), Some(latch)) = (&self.choreography.reveal, &mut self.reveal) else {
            return false;
        };
        if latch.observe(visible_fraction) {
            apply_reveal(&mut self.host, script, latch);
            true
        } else {
            false
        }
    }

    /// The validated choreography being driven.
    pub fn choreography(&self) -> &Choreography {
        &self.choreography
    }

    /// Index of the currently selected word, if any.
    pub fn selected_word(&self) -> Option<usize> {
        self.selection.current()
    }

    /// Whether the nav menu is open.
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Whether the one-shot reveal has fired.
    pub fn revealed(&self) -> bool {
        self.reveal.as_ref().is_some_and(RevealOnce::is_revealed)
    }

    /// The host being driven.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access. After changing anything a pass reads, call
    /// [`ScrollDirector::notify_scroll`] and claim the pass.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the director, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    fn run_pass(&mut self) {
        let viewport_height = self.host.viewport_height();
        let scroll_y = self.host.scroll_y();

        if let Some(rect) = self.host.section_rect(Section::Hero) {
            let geo = SectionGeometry::from_rect(rect, viewport_height);
            let frame = eval_parallax(&self.choreography.parallax, geo.progress(), scroll_y);
            apply_parallax(&mut self.host, &self.choreography.parallax, &frame);
        }

        let mut selection_open = false;
        if let Some(rect) = self.host.section_rect(Section::Formt) {
            let geo = SectionGeometry::from_rect(rect, viewport_height);
            let widths = self.host.word_widths();
            let frame = eval_formt(&self.choreography.formt, geo.progress(), &widths);
            selection_open = frame.selection_open;
            apply_formt(&mut self.host, &self.choreography.formt, &frame);
        }

        if self.selection.enforce_gate(selection_open) {
            apply_selection(&mut self.host, &self.choreography.formt, &self.selection);
        }
    }

    fn selection_open(&self) -> bool {
        let Some(rect) = self.host.section_rect(Section::Formt) else {
            return false;
        };
        let geo = SectionGeometry::from_rect(rect, self.host.viewport_height());
        geo.progress().0 >= self.choreography.formt.select_gate
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/director.rs"]
mod tests;
