use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Game constants
// ---------------------------------------------------------------------------

/// Number of problems in one session queue.
pub const MAX_PROBLEMS: usize = 10;

/// Lower bound of the factor range (inclusive).
pub const MIN_FACTOR: u32 = 1;

/// Upper bound of the factor range (inclusive).
pub const MAX_FACTOR: u32 = 10;

/// Number of answer choices per problem, correct answer included.
pub const NUM_CHOICES: usize = 7;

/// Largest value a choice may take. Equals the largest possible product.
pub const CHOICE_CEILING: u32 = MAX_FACTOR * MAX_FACTOR;

/// How long a presentation surface should hold the "correct" feedback and keep
/// input disabled before showing the next problem. The surface owns the timer;
/// the core only publishes the canonical duration.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(800);

// ---------------------------------------------------------------------------
// Problem
// ---------------------------------------------------------------------------

/// One multiplication problem with its multiple-choice answers.
///
/// Immutable once generated. `choices` holds exactly [`NUM_CHOICES`] distinct
/// values in `[0, CHOICE_CEILING]`, sorted ascending, and always contains
/// `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub question: String,
    pub choices: Vec<u32>,
    pub answer: u32,
}

impl Problem {
    /// True if `value` is the correct answer to this problem.
    pub fn is_correct(&self, value: u32) -> bool {
        value == self.answer
    }

    /// True if `value` appears among the answer choices.
    pub fn has_choice(&self, value: u32) -> bool {
        self.choices.contains(&value)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.question)
    }
}

// ---------------------------------------------------------------------------
// Session configuration / lifecycle
// ---------------------------------------------------------------------------

/// Configuration for a quiz session.
///
/// `rng_seed: Some(u64)` makes the whole session reproducible — the same seed
/// yields the same queue of problems every time. `None` seeds from entropy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub problem_count: usize,
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    /// Default configuration: [`MAX_PROBLEMS`] problems, entropy seeding.
    pub fn new() -> Self {
        Self {
            problem_count: MAX_PROBLEMS,
            rng_seed: None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::NotStarted => write!(f, "not started"),
            GamePhase::InProgress => write!(f, "in progress"),
            GamePhase::Finished   => write!(f, "finished"),
        }
    }
}

// ---------------------------------------------------------------------------
// Signals in, events out
// ---------------------------------------------------------------------------

/// A discrete external signal delivered to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Start,
    AnswerSelected(u32),
    Restart,
}

/// Command emitted back to the presentation surface after each signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A fresh session began; display this problem.
    Started { problem: Problem },
    /// The answer was right; display `next` after [`ADVANCE_DELAY`].
    Correct { next: Problem },
    /// The answer was wrong; the current problem stays up.
    Wrong { selected: u32 },
    /// The final problem was answered correctly.
    Finished { report: SessionReport },
    /// The signal arrived in a phase where it has no meaning.
    Ignored,
}

/// Result of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub elapsed: Duration,
    pub errors: u32,
}
