/// Coalesces change notifications into single update passes.
///
/// Scroll and resize notifications arrive far faster than update passes
/// need to run. The scheduler latches the first request and absorbs the
/// rest until the pass is claimed, so one pass runs per tick no matter
/// how many notifications arrived in between.
#[derive(Clone, Debug, Default)]
pub struct PassScheduler {
    pending: bool,
    coalesced: u32,
}

impl PassScheduler {
    /// Create an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that observable state changed and a pass is needed.
    ///
    /// Returns `true` when the caller should schedule a tick; requests
    /// arriving while a pass is already latched are absorbed and return
    /// `false`.
    pub fn request_pass(&mut self) -> bool {
        self.coalesced = self.coalesced.saturating_add(1);
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Whether a pass is currently due.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of requests coalesced since the last claimed pass.
    pub fn coalesced(&self) -> u32 {
        self.coalesced
    }

    /// Claim the due pass and reset for the next tick.
    ///
    /// Returns how many requests the claimed pass coalesced, or `None`
    /// when no pass is due. Requests arriving after the claim latch a
    /// fresh pass.
    pub fn drain(&mut self) -> Option<u32> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(std::mem::take(&mut self.coalesced))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/frame.rs"]
mod tests;
