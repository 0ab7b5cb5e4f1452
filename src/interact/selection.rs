use crate::choreography::model::FormtScript;

/// Exclusive word selection for the FORMT description panel.
///
/// At most one word is selected at a time. Selecting the current word
/// again deselects it; selecting another word switches to it. Selection
/// is only honored while the section's gate is open, and only for words
/// that carry a description.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    current: Option<usize>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the currently selected word, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Toggle selection of the word at `index`.
    ///
    /// Ignored while `open` is false, for out-of-range indices and for
    /// words without a description. Returns `true` when the selection
    /// changed.
    pub fn select(&mut self, script: &FormtScript, index: usize, open: bool) -> bool {
        if !open {
            return false;
        }
        let selectable = script
            .words
            .get(index)
            .is_some_and(|w| w.description.is_some());
        if !selectable {
            return false;
        }
        self.current = match self.current {
            Some(cur) if cur == index => None,
            _ => Some(index),
        };
        true
    }

    /// Clear any selection. Returns `true` when one was cleared.
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Drop the selection when the gate has closed.
    ///
    /// Returns `true` when a selection was dropped.
    pub fn enforce_gate(&mut self, open: bool) -> bool {
        if open { false } else { self.dismiss() }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/selection.rs"]
mod tests;
