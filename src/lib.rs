// Library interface for spelling-bee-oracle
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod hints;
pub mod letters;
pub mod logging;
pub mod mcp;
pub mod oracle;
pub mod server;
pub mod session;
pub mod vocabulary;

// Re-export commonly used items for easier testing
pub use error::{OracleError, Result};
pub use letters::LetterConfiguration;
pub use oracle::{MIN_WORD_LENGTH, Verdict, WordOracle};
pub use session::{RoundSummary, Submission, play_round};
pub use vocabulary::{Vocabulary, WordSource};
