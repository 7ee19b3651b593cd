/// Counts completed rounds for one play session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RoundTracker {
    round_count: u32,
}

impl RoundTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn increment_round_count(&mut self) {
        self.round_count += 1;
    }

    pub fn reset_round_count(&mut self) {
        self.round_count = 0;
    }
}
