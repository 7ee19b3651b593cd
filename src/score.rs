//! Score accounting for the current round.
//!
//! The displayed score is `guessed - skipped`, clamped at zero so it never
//! goes negative when skips outpace guesses.

use std::fmt;

type ChangeHook = Box<dyn FnMut(u32)>;

/// Counts guessed and skipped words and derives the total score.
#[derive(Default)]
pub struct ScoreTracker {
    guessed_words: u32,
    skipped_words: u32,
    on_change: Option<ChangeHook>,
}

impl ScoreTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hook called with the new total score after every mutation.
    /// Replaces any previously registered hook.
    pub fn on_change<F>(&mut self, hook: F)
    where
        F: FnMut(u32) + 'static,
    {
        self.on_change = Some(Box::new(hook));
    }

    #[must_use]
    pub fn guessed_words(&self) -> u32 {
        self.guessed_words
    }

    #[must_use]
    pub fn skipped_words(&self) -> u32 {
        self.skipped_words
    }

    /// `max(guessed - skipped, 0)`, recomputed on every call.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.guessed_words.saturating_sub(self.skipped_words)
    }

    pub fn increment_guessed_words(&mut self) {
        self.guessed_words += 1;
        self.notify();
    }

    pub fn increment_skipped_words(&mut self) {
        self.skipped_words += 1;
        self.notify();
    }

    pub fn reset(&mut self) {
        self.guessed_words = 0;
        self.skipped_words = 0;
        self.notify();
    }

    fn notify(&mut self) {
        let score = self.total_score();
        if let Some(hook) = self.on_change.as_mut() {
            hook(score);
        }
    }
}

impl fmt::Debug for ScoreTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreTracker")
            .field("guessed_words", &self.guessed_words)
            .field("skipped_words", &self.skipped_words)
            .field("total_score", &self.total_score())
            .finish_non_exhaustive()
    }
}
