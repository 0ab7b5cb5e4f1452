/// One-shot visibility latch.
///
/// Fires the first time the observed visible fraction reaches the
/// threshold and never resets, so a revealed element stays revealed no
/// matter how the viewport moves afterwards.
#[derive(Clone, Debug)]
pub struct RevealOnce {
    threshold: f64,
    revealed: bool,
}

impl RevealOnce {
    /// Create a latch that fires at `threshold` visible fraction.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    /// Whether the latch has fired.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an observed visible fraction in `[0, 1]`.
    ///
    /// Returns `true` when this observation fired the latch. Non-finite
    /// observations never fire it.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if !self.revealed && visible_fraction.is_finite() && visible_fraction >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/reveal.rs"]
mod tests;
