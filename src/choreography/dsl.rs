use crate::{
    choreography::model::{Choreography, FormtScript, MenuScript, ParallaxScript, RevealScript},
    foundation::error::{StageError, StageResult},
};

/// Builder for [`Choreography`](crate::Choreography).
///
/// Starts from the production page defaults, so a plain
/// `ChoreographyBuilder::new().build()` yields a valid choreography and
/// callers only override what differs.
#[derive(Debug)]
pub struct ChoreographyBuilder {
    parallax: ParallaxScript,
    formt: FormtScript,
    menu: Option<MenuScript>,
    reveal: Option<RevealScript>,
}

impl Default for ChoreographyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoreographyBuilder {
    /// Create a builder seeded with the default page choreography.
    pub fn new() -> Self {
        let base = Choreography::default();
        Self {
            parallax: base.parallax,
            formt: base.formt,
            menu: base.menu,
            reveal: base.reveal,
        }
    }

    /// Replace the hero parallax script.
    pub fn parallax(mut self, script: ParallaxScript) -> Self {
        self.parallax = script;
        self
    }

    /// Replace the FORMT section script.
    pub fn formt(mut self, script: FormtScript) -> Self {
        self.formt = script;
        self
    }

    /// Replace the nav menu wiring.
    pub fn menu(mut self, script: MenuScript) -> Self {
        self.menu = Some(script);
        self
    }

    /// Drop the nav menu wiring entirely.
    pub fn without_menu(mut self) -> Self {
        self.menu = None;
        self
    }

    /// Replace the one-shot reveal wiring.
    pub fn reveal(mut self, script: RevealScript) -> Self {
        self.reveal = Some(script);
        self
    }

    /// Drop the one-shot reveal wiring entirely.
    pub fn without_reveal(mut self) -> Self {
        self.reveal = None;
        self
    }

    /// Attach a selection description to the word with the given label.
    pub fn word_description(
        mut self,
        label: impl AsRef<str>,
        text: impl Into<String>,
    ) -> StageResult<Self> {
        let label = label.as_ref();
        let word = self
            .formt
            .words
            .iter_mut()
            .find(|w| w.label == label)
            .ok_or_else(|| StageError::validation(format!("no word labeled '{label}'")))?;
        word.description = Some(text.into());
        Ok(self)
    }

    /// Build and validate the final [`Choreography`](crate::Choreography).
    pub fn build(self) -> StageResult<Choreography> {
        let choreo = Choreography {
            parallax: self.parallax,
            formt: self.formt,
            menu: self.menu,
            reveal: self.reveal,
        };
        choreo.validate()?;
        Ok(choreo)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/dsl.rs"]
mod tests;
