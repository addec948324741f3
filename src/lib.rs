//! # math_drill_gen
//!
//! A fully offline multiplication-quiz engine: timed single-player sessions of
//! randomly generated multiple-choice problems, with a persisted best-time
//! record.
//!
//! ## How it works
//!
//! 1. Create a [`Session`] from a [`GameConfig`] (problem count, optional RNG
//!    seed) and a [`Clock`].
//! 2. Deliver [`Signal`]s — `Start`, `AnswerSelected(value)`, `Restart` — and
//!    render the [`SessionEvent`] that comes back. On `Start` the engine draws
//!    the whole queue eagerly: two uniform factors in `[1, 10]` per problem and
//!    seven distinct, ascending choices that always include the product.
//! 3. A correct answer advances the queue; a wrong one only bumps the error
//!    count. Answering the last problem yields a [`SessionReport`] with the
//!    elapsed time and error total.
//! 4. Feed the report's elapsed time to [`record_elapsed`] against any
//!    [`RecordStore`] — the stored best time is overwritten only on strict
//!    improvement.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact same
//!   problem queue every time — useful for tests and demos.
//! - **UI-agnostic**: the engine owns no rendering and no timers. Presentation
//!   surfaces render events, map choice buttons through
//!   [`Session::choice_at`], and hold input for [`ADVANCE_DELAY`] after a
//!   correct answer before showing the next problem.
//! - **Pluggable persistence**: best times go through the [`RecordStore`]
//!   seam; [`MemoryStore`] for embedders and tests, [`FileStore`] for a JSON
//!   file under the platform data directory.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{Clock, GameConfig, Session, SessionEvent, Signal};
//!
//! // Seeded session: same seed, same ten problems.
//! let config = GameConfig { rng_seed: Some(42), ..GameConfig::new() };
//! let mut session = Session::new(config, Clock::default());
//!
//! if let SessionEvent::Started { problem } = session.handle(Signal::Start) {
//!     println!("Q: {}", problem.question);
//! }
//!
//! // A choice button maps its index to the value it carries.
//! let first_choice = session.choice_at(0).unwrap();
//! match session.handle(Signal::AnswerSelected(first_choice)) {
//!     SessionEvent::Correct { next } => println!("next up: {}", next.question),
//!     SessionEvent::Wrong { selected } => println!("{selected} is not it"),
//!     _ => {}
//! }
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `math_drill_gen::Session`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_problem, generate_queue, problem_for_factors, record_elapsed, BestTimeOutcome,
    Clock, FileStore, GameConfig, GamePhase, MemoryStore, Problem, RecordStore, Session,
    SessionEvent, SessionReport, Signal, StorageError, ADVANCE_DELAY, BEST_TIME_KEY,
    CHOICE_CEILING, MAX_FACTOR, MAX_PROBLEMS, MIN_FACTOR, NUM_CHOICES,
};
