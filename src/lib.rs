// Library interface for word-session
// This allows integration tests to access internal modules

pub mod cli;
pub mod logging;
pub mod round;
pub mod score;
pub mod session;
pub mod storage;
pub mod word_pool;

// Re-export commonly used types for easier testing
pub use round::RoundTracker;
pub use score::ScoreTracker;
pub use session::{
    GameSession, RoundSummary, SessionInterface, SessionStatus, UserAction, session_loop,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use word_pool::{POOR_WORDS_KEY, WORDS_KEY, WordPoolStore};
