use serde::Serialize;

use crate::round::RoundTracker;
use crate::score::ScoreTracker;
use crate::storage::KeyValueStore;
use crate::word_pool::WordPoolStore;
use crate::{debug_log, info_log};

/// Actions a front end can feed into the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guessed(String),
    Skipped(String),
    NextRound,
    NewGame,
    Status,
    Exit,
}

/// What happened in a round that was just finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub round: u32,
    pub score: u32,
    pub guessed: Vec<String>,
    pub skipped: Vec<String>,
    pub words_left: usize,
}

/// Snapshot of the running session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub rounds_played: u32,
    pub score: u32,
    pub guessed_words: u32,
    pub skipped_words: u32,
    pub words_left: usize,
    pub poor_words: usize,
}

/// Input/output seam between the session loop and a front end.
pub trait SessionInterface {
    /// `None` means the input was not understood and should be ignored.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_round_summary(&mut self, summary: &RoundSummary);
    fn display_status(&mut self, status: &SessionStatus);
    fn display_new_game_message(&mut self, words_left: usize);
    fn display_exit_message(&mut self);
}

/// Owns one of each tracker plus the persistent pool for a play session.
#[derive(Debug)]
pub struct GameSession<S: KeyValueStore> {
    rounds: RoundTracker,
    score: ScoreTracker,
    pool: WordPoolStore<S>,
    round_guessed: Vec<String>,
    round_skipped: Vec<String>,
}

impl<S: KeyValueStore> GameSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            rounds: RoundTracker::new(),
            score: ScoreTracker::new(),
            pool: WordPoolStore::new(store),
            round_guessed: Vec::new(),
            round_skipped: Vec::new(),
        }
    }

    pub fn rounds(&self) -> &RoundTracker {
        &self.rounds
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn pool(&self) -> &WordPoolStore<S> {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut WordPoolStore<S> {
        &mut self.pool
    }

    pub fn guessed(&mut self, word: String) {
        debug_log!("guessed '{}'", word);
        self.score.increment_guessed_words();
        self.round_guessed.push(word);
    }

    pub fn skipped(&mut self, word: String) {
        debug_log!("skipped '{}'", word);
        self.score.increment_skipped_words();
        self.round_skipped.push(word);
    }

    /// Closes the current round: guessed words leave the pool, skipped words
    /// are flagged poor, the round counter advances and the score resets.
    pub fn finish_round(&mut self) -> RoundSummary {
        let guessed = std::mem::take(&mut self.round_guessed);
        let skipped = std::mem::take(&mut self.round_skipped);
        let score = self.score.total_score();

        if !guessed.is_empty() {
            self.pool.remove_words(&guessed);
        }
        if !skipped.is_empty() {
            self.pool.save_poor_words(&skipped);
        }

        self.rounds.increment_round_count();
        self.score.reset();

        let summary = RoundSummary {
            round: self.rounds.round_count(),
            score,
            guessed,
            skipped,
            words_left: self.pool.get_words().len(),
        };
        info_log!(
            "round {} finished with score {} ({} words left)",
            summary.round,
            summary.score,
            summary.words_left
        );
        summary
    }

    /// Starts over without touching the persisted lists. Words recorded in
    /// an unfinished round are discarded.
    pub fn new_game(&mut self) {
        self.rounds.reset_round_count();
        self.score.reset();
        self.round_guessed.clear();
        self.round_skipped.clear();
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            rounds_played: self.rounds.round_count(),
            score: self.score.total_score(),
            guessed_words: self.score.guessed_words(),
            skipped_words: self.score.skipped_words(),
            words_left: self.pool.get_words().len(),
            poor_words: self.pool.get_poor_words().len(),
        }
    }
}

pub fn session_loop<S: KeyValueStore, I: SessionInterface>(
    session: &mut GameSession<S>,
    interface: &mut I,
) {
    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Guessed(word) => session.guessed(word),
            UserAction::Skipped(word) => session.skipped(word),
            UserAction::NextRound => {
                let summary = session.finish_round();
                interface.display_round_summary(&summary);
            }
            UserAction::NewGame => {
                session.new_game();
                interface.display_new_game_message(session.pool().get_words().len());
            }
            UserAction::Status => interface.display_status(&session.status()),
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::VecDeque;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    fn seeded_session(pool: &[&str]) -> GameSession<MemoryStore> {
        let mut session = GameSession::new(MemoryStore::new());
        session.pool_mut().save_words(&words(pool));
        session
    }

    /// Scripted front end that records everything it is asked to show.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        summaries: Vec<RoundSummary>,
        statuses: Vec<SessionStatus>,
        new_games: Vec<usize>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                ..Self::default()
            }
        }
    }

    impl SessionInterface for ScriptedInterface {
        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_round_summary(&mut self, summary: &RoundSummary) {
            self.summaries.push(summary.clone());
        }

        fn display_status(&mut self, status: &SessionStatus) {
            self.statuses.push(status.clone());
        }

        fn display_new_game_message(&mut self, words_left: usize) {
            self.new_games.push(words_left);
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    #[test]
    fn test_finish_round_updates_pool_and_poor_words() {
        let mut session = seeded_session(&["apple", "pear", "plum", "fig"]);
        session.guessed("apple".to_string());
        session.guessed("fig".to_string());
        session.skipped("plum".to_string());

        let summary = session.finish_round();

        assert_eq!(summary.round, 1);
        assert_eq!(summary.score, 1);
        assert_eq!(summary.guessed, words(&["apple", "fig"]));
        assert_eq!(summary.skipped, words(&["plum"]));
        assert_eq!(summary.words_left, 2);
        assert_eq!(session.pool().get_words(), words(&["pear", "plum"]));
        assert_eq!(session.pool().get_poor_words(), words(&["plum"]));
    }

    #[test]
    fn test_finish_round_resets_score_but_not_rounds() {
        let mut session = seeded_session(&["a", "b"]);
        session.guessed("a".to_string());
        session.finish_round();

        assert_eq!(session.score().total_score(), 0);
        assert_eq!(session.rounds().round_count(), 1);

        session.finish_round();
        assert_eq!(session.rounds().round_count(), 2);
    }

    #[test]
    fn test_empty_round_leaves_storage_untouched() {
        let mut session = GameSession::new(MemoryStore::new());
        let summary = session.finish_round();

        assert_eq!(summary.score, 0);
        assert_eq!(session.pool().store().get_item("words").unwrap(), None);
        assert_eq!(session.pool().store().get_item("poor-words").unwrap(), None);
    }

    #[test]
    fn test_round_score_is_clamped() {
        let mut session = seeded_session(&["a", "b", "c"]);
        session.guessed("a".to_string());
        session.skipped("b".to_string());
        session.skipped("c".to_string());
        assert_eq!(session.finish_round().score, 0);
    }

    #[test]
    fn test_new_game_resets_counters_and_keeps_pool() {
        let mut session = seeded_session(&["a", "b"]);
        session.guessed("a".to_string());
        session.finish_round();
        session.guessed("b".to_string());

        session.new_game();

        assert_eq!(session.rounds().round_count(), 0);
        assert_eq!(session.score().total_score(), 0);
        assert_eq!(session.pool().get_words(), words(&["b"]));

        // The discarded guess must not leak into the next round
        let summary = session.finish_round();
        assert!(summary.guessed.is_empty());
        assert_eq!(session.pool().get_words(), words(&["b"]));
    }

    #[test]
    fn test_status_reflects_session() {
        let mut session = seeded_session(&["a", "b", "c"]);
        session.pool_mut().save_poor_words(&words(&["z"]));
        session.guessed("a".to_string());
        session.skipped("b".to_string());
        session.guessed("c".to_string());

        let status = session.status();
        assert_eq!(
            status,
            SessionStatus {
                rounds_played: 0,
                score: 1,
                guessed_words: 2,
                skipped_words: 1,
                words_left: 3,
                poor_words: 1,
            }
        );
    }

    #[test]
    fn test_session_loop_plays_rounds_until_exit() {
        let mut session = seeded_session(&["apple", "pear", "plum"]);
        let mut ui = ScriptedInterface::new(vec![
            Some(UserAction::Guessed("apple".to_string())),
            None,
            Some(UserAction::Skipped("pear".to_string())),
            Some(UserAction::NextRound),
            Some(UserAction::Guessed("plum".to_string())),
            Some(UserAction::Status),
            Some(UserAction::NextRound),
            Some(UserAction::Exit),
            Some(UserAction::Guessed("never".to_string())),
        ]);

        session_loop(&mut session, &mut ui);

        assert!(ui.exited);
        assert_eq!(ui.summaries.len(), 2);
        assert_eq!(ui.summaries[0].round, 1);
        assert_eq!(ui.summaries[0].score, 0);
        assert_eq!(ui.summaries[1].round, 2);
        assert_eq!(ui.summaries[1].score, 1);
        assert_eq!(ui.statuses.len(), 1);
        assert_eq!(ui.statuses[0].score, 1);
        assert_eq!(session.pool().get_words(), words(&["pear"]));
        assert_eq!(session.pool().get_poor_words(), words(&["pear"]));
    }

    #[test]
    fn test_session_loop_new_game() {
        let mut session = seeded_session(&["a", "b"]);
        let mut ui = ScriptedInterface::new(vec![
            Some(UserAction::Guessed("a".to_string())),
            Some(UserAction::NextRound),
            Some(UserAction::NewGame),
        ]);

        session_loop(&mut session, &mut ui);

        assert_eq!(ui.new_games, vec![1]);
        assert_eq!(session.rounds().round_count(), 0);
        assert!(ui.exited);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let summary = RoundSummary {
            round: 3,
            score: 2,
            guessed: words(&["a", "b"]),
            skipped: Vec::new(),
            words_left: 10,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"round":3,"score":2,"guessed":["a","b"],"skipped":[],"words_left":10}"#
        );
    }
}
