//! Core quiz engine — problem generation, session sequencing, best-time records.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: problems, config, signals, events, constants |
//! | `generator` | Factor drawing and the distractor-choice loop |
//! | `session`   | The NotStarted → InProgress → Finished state machine |
//! | `clock`     | Monotonic/fixed clock so timing is deterministic in tests |
//! | `best_time` | Record-store seam and the best-time comparison |
//! | `storage`   | File-backed record store under the platform data directory |

pub mod best_time;
pub mod clock;
pub mod generator;
pub mod models;
pub mod session;
pub mod storage;

// Re-export the public API surface so callers can use
// `quiz_engine::Session` without reaching into sub-modules.
pub use best_time::{record_elapsed, BestTimeOutcome, MemoryStore, RecordStore, BEST_TIME_KEY};
pub use clock::Clock;
pub use generator::{generate_problem, generate_queue, problem_for_factors};
pub use models::{
    GameConfig, GamePhase, Problem, SessionEvent, SessionReport, Signal, ADVANCE_DELAY,
    CHOICE_CEILING, MAX_FACTOR, MAX_PROBLEMS, MIN_FACTOR, NUM_CHOICES,
};
pub use session::Session;
pub use storage::{FileStore, StorageError};
