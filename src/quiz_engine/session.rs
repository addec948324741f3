use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::quiz_engine::clock::Clock;
use crate::quiz_engine::generator::generate_queue;
use crate::quiz_engine::models::{
    GameConfig, GamePhase, Problem, SessionEvent, SessionReport, Signal,
};

/// One run through a fixed queue of problems, from start to finish or restart.
///
/// The session is the single owner of all mutable game state. External
/// collaborators drive it with [`Signal`]s and render whatever [`SessionEvent`]
/// comes back; every transition happens synchronously inside the signal call.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    clock: Clock,
    rng: StdRng,
    phase: GamePhase,
    queue: Vec<Problem>,
    index: usize,
    errors: u32,
    started_at: Option<Instant>,
}

impl Session {
    pub fn new(config: GameConfig, clock: Clock) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        // A session needs at least one problem to have a meaningful lifecycle.
        let config = GameConfig {
            problem_count: config.problem_count.max(1),
            ..config
        };

        Self {
            config,
            clock,
            rng,
            phase: GamePhase::NotStarted,
            queue: Vec::new(),
            index: 0,
            errors: 0,
            started_at: None,
        }
    }

    /// Route one external signal to the matching transition.
    pub fn handle(&mut self, signal: Signal) -> SessionEvent {
        match signal {
            Signal::Start                 => self.start(),
            Signal::AnswerSelected(value) => self.answer(value),
            Signal::Restart               => self.restart(),
        }
    }

    /// Begin a fresh run: reset counters, generate the full queue eagerly,
    /// record the start timestamp.
    pub fn start(&mut self) -> SessionEvent {
        self.queue = generate_queue(&mut self.rng, self.config.problem_count);
        self.index = 0;
        self.errors = 0;
        self.started_at = Some(self.clock.now());
        self.phase = GamePhase::InProgress;

        info!(target: "session", problems = self.queue.len(), "session started");
        SessionEvent::Started {
            problem: self.queue[0].clone(),
        }
    }

    /// Discard the current run wholesale and begin another. Identical to
    /// [`Session::start`]; permitted from any phase.
    pub fn restart(&mut self) -> SessionEvent {
        self.start()
    }

    /// Judge a selected answer value against the current problem.
    ///
    /// A value not present among the current choices is simply wrong. Answer
    /// signals outside the in-progress phase are ignored.
    pub fn answer(&mut self, selected: u32) -> SessionEvent {
        if self.phase != GamePhase::InProgress {
            debug!(target: "session", selected, phase = %self.phase, "answer signal ignored");
            return SessionEvent::Ignored;
        }

        let current = &self.queue[self.index];
        if current.is_correct(selected) {
            self.index += 1;
            if self.index == self.queue.len() {
                self.phase = GamePhase::Finished;
                let report = SessionReport {
                    elapsed: self.elapsed(),
                    errors: self.errors,
                };
                info!(
                    target: "session",
                    elapsed_secs = report.elapsed.as_secs_f64(),
                    errors = report.errors,
                    "session finished"
                );
                SessionEvent::Finished { report }
            } else {
                debug!(target: "session", index = self.index, "correct answer, advancing");
                SessionEvent::Correct {
                    next: self.queue[self.index].clone(),
                }
            }
        } else {
            self.errors += 1;
            debug!(target: "session", selected, errors = self.errors, "wrong answer");
            SessionEvent::Wrong { selected }
        }
    }

    /// Fraction of the queue solved so far, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.config.problem_count as f32
    }

    /// The problem currently awaiting an answer.
    pub fn current(&self) -> Option<&Problem> {
        match self.phase {
            GamePhase::InProgress => self.queue.get(self.index),
            _ => None,
        }
    }

    /// Pure choice-index → value mapping for button surfaces: the value the
    /// `i`-th choice button of the current problem carries.
    pub fn choice_at(&self, index: usize) -> Option<u32> {
        self.current().and_then(|p| p.choices.get(index).copied())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Number of problems solved so far.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn problem_count(&self) -> usize {
        self.config.problem_count
    }

    /// Mutable clock access, so drivers can advance a fixed clock mid-run.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    fn elapsed(&self) -> std::time::Duration {
        match self.started_at {
            Some(start) => self.clock.now().saturating_duration_since(start),
            None => std::time::Duration::ZERO,
        }
    }
}
