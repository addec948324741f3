//! End-to-end demo of the quiz engine.
//!
//! Run with: `cargo run --example demo`
//!
//! Two complete sessions are simulated against a frozen clock and a shared
//! record store:
//!
//! 1. **First run** — a clean, quick playthrough. Its time becomes the best.
//! 2. **Second run** — slower pace plus a stumble on every fourth problem,
//!    so the stored best stands.
//!
//! ## Key concepts demonstrated
//!
//! - `rng_seed: Some(u64)` makes a session fully deterministic.
//! - The signal/event protocol: the demo plays the presentation surface,
//!   sending `Signal`s and rendering whatever `SessionEvent` comes back.
//!   A real surface would also hold input for `ADVANCE_DELAY` after each
//!   correct answer; the frozen clock lets the demo skip the waiting.
//! - Best-time recording: `record_elapsed` only overwrites on strict
//!   improvement.
//!
//! Set `LOG_LEVEL=debug` to watch the engine's own tracing output interleave
//! with the rendered session.

use std::time::{Duration, Instant};

use math_drill_gen::{
    record_elapsed, Clock, GameConfig, MemoryStore, Problem, Session, SessionEvent, Signal,
    ADVANCE_DELAY,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn progress_bar(fraction: f32) -> String {
    const WIDTH: usize = 20;
    let filled = (fraction * WIDTH as f32).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(WIDTH - filled),
        fraction * 100.0
    )
}

fn choices_row(problem: &Problem) -> String {
    problem
        .choices
        .iter()
        .map(|c| format!("[{c:>3}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Simulate one full session.
///
/// `pace` is how long the scripted player "thinks" before each click; with
/// `stumble_every = n`, every n-th problem gets one wrong click first.
fn run_session(
    label: &str,
    seed: u64,
    pace: Duration,
    stumble_every: usize,
    store: &mut MemoryStore,
) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {label}  (seed {seed}, {} ms per answer)", pace.as_millis());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = GameConfig {
        rng_seed: Some(seed),
        ..GameConfig::new()
    };
    let mut session = Session::new(config, Clock::fixed(Instant::now()));

    let SessionEvent::Started { problem } = session.handle(Signal::Start) else {
        return;
    };
    let mut current = problem;
    let mut solved = 0usize;

    loop {
        println!("  {}  Q{:>2}: {}", progress_bar(session.progress()), solved + 1, current.question);
        println!("      {}", choices_row(&current));

        if stumble_every != 0 && (solved + 1) % stumble_every == 0 {
            let wrong = current
                .choices
                .iter()
                .copied()
                .find(|&c| c != current.answer)
                .unwrap();
            session.clock_mut().advance(pace);
            if let SessionEvent::Wrong { selected } = session.handle(Signal::AnswerSelected(wrong))
            {
                println!("      ✗ {selected} is wrong — try again");
            }
        }

        session.clock_mut().advance(pace);
        match session.handle(Signal::AnswerSelected(current.answer)) {
            SessionEvent::Correct { next } => {
                println!("      ✓ {}", current.answer);
                solved += 1;
                current = next;
            }
            SessionEvent::Finished { report } => {
                println!("      ✓ {}", current.answer);
                println!();
                println!(
                    "  Finished in {:.2} s with {} error(s)",
                    report.elapsed.as_secs_f64(),
                    report.errors
                );
                let outcome = record_elapsed(store, report.elapsed);
                if outcome.is_new_best() {
                    println!("  ★ New best time: {:.2} s", outcome.display_secs());
                } else {
                    println!("  Best time stands at {:.2} s", outcome.display_secs());
                }
                println!();
                break;
            }
            _ => break,
        }
    }
}

fn main() {
    init_tracing();

    println!();
    println!("══ math_drill_gen demo ══");
    println!();
    println!(
        "A surface holds input for {} ms after each correct answer; the",
        ADVANCE_DELAY.as_millis()
    );
    println!("frozen demo clock advances instead, so the run is instant.");
    println!();

    let mut store = MemoryStore::new();
    run_session("First run — clean and quick", 7, Duration::from_millis(1200), 0, &mut store);
    run_session(
        "Second run — slower, stumbling on every 4th problem",
        21,
        Duration::from_millis(1500),
        4,
        &mut store,
    );
}
