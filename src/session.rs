use crate::info_log;
use crate::letters::LetterConfiguration;
use crate::oracle::{Verdict, WordOracle};
use crate::vocabulary::normalize;
use std::collections::BTreeSet;

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundAction {
    Submit(String),
    Reveal,
    NewRound,
    Exit,
}

/// Result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Repeat,
    Rejected(Verdict),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub found: Vec<String>,
    pub total: usize,
}

/// Trait abstracting the UI layer so the round loop can be driven by a
/// terminal or by scripted input in tests.
pub trait RoundInterface {
    fn display_round_start(&mut self, config: &LetterConfiguration, total: usize);
    /// `None` means the input was unusable and the prompt should repeat.
    fn read_action(&mut self) -> Option<RoundAction>;
    fn display_submission(&mut self, word: &str, submission: Submission, found: usize, total: usize);
    fn display_answers(&mut self, answers: &BTreeSet<String>, found: &BTreeSet<String>);
    fn display_complete(&mut self, total: usize);
    fn display_exit_message(&mut self);
}

/// Tracks found words for a round over a fixed configuration.
#[derive(Debug)]
pub struct Round<'a> {
    oracle: &'a WordOracle,
    config: LetterConfiguration,
    answers: BTreeSet<String>,
    found: BTreeSet<String>,
}

impl<'a> Round<'a> {
    #[must_use]
    pub fn new(oracle: &'a WordOracle, config: LetterConfiguration) -> Self {
        let answers = oracle.all_valid_answers(&config);
        Self {
            oracle,
            config,
            answers,
            found: BTreeSet::new(),
        }
    }

    pub fn submit(&mut self, candidate: &str) -> Submission {
        match self.oracle.check_answer(candidate, &self.config) {
            Verdict::Accepted => {
                if self.found.insert(normalize(candidate)) {
                    Submission::Accepted
                } else {
                    Submission::Repeat
                }
            }
            verdict => Submission::Rejected(verdict),
        }
    }

    pub fn reset(&mut self) {
        self.found.clear();
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.answers.is_empty() && self.found.len() == self.answers.len()
    }

    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            found: self.found.iter().cloned().collect(),
            total: self.answers.len(),
        }
    }
}

/// Run a practice round until every answer is found, the player reveals
/// the answers, or the player exits.
pub fn play_round<I: RoundInterface>(
    oracle: &WordOracle,
    config: LetterConfiguration,
    interface: &mut I,
) -> RoundSummary {
    let mut round = Round::new(oracle, config);
    info_log!(
        "Starting round {} with {} answers",
        round.config,
        round.answers.len()
    );
    interface.display_round_start(&round.config, round.answers.len());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            RoundAction::Exit => {
                interface.display_exit_message();
                break;
            }
            RoundAction::Reveal => {
                interface.display_answers(&round.answers, &round.found);
                break;
            }
            RoundAction::NewRound => {
                round.reset();
                interface.display_round_start(&round.config, round.answers.len());
            }
            RoundAction::Submit(word) => {
                let submission = round.submit(&word);
                interface.display_submission(
                    &word,
                    submission,
                    round.found.len(),
                    round.answers.len(),
                );
                if round.is_complete() {
                    interface.display_complete(round.answers.len());
                    break;
                }
            }
        }
    }

    round.summary()
}
