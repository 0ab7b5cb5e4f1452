/// Open/close state of the mobile nav menu.
#[derive(Clone, Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Create a closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle the menu and return its new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `true` when it was open.
    pub fn close(&mut self) -> bool {
        std::mem::take(&mut self.open)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/nav.rs"]
mod tests;
