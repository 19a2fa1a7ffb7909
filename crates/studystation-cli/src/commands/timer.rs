//! Countdown timer commands.
//!
//! `run` drives the engine with a one-second [`Ticker`] until Ctrl-C or
//! a phase limit. The ticker is dropped whenever the engine stops and
//! recreated when it resumes, so exactly one tick source is ever live.

use std::io::Write;

use clap::Subcommand;
use studystation_core::{Config, Event, Ticker, TimerEngine};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Print the fresh timer state as JSON
    Show,
    /// Run the countdown until Ctrl-C (or a phase limit)
    Run {
        /// Override the work phase duration in seconds
        #[arg(long)]
        work_secs: Option<u32>,
        /// Override the break phase duration in seconds
        #[arg(long)]
        break_secs: Option<u32>,
        /// Stop after this many phase transitions
        #[arg(long)]
        phases: Option<u32>,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimerAction::Show => {
            let engine =
                TimerEngine::with_presets(config.timer.work_secs, config.timer.break_secs);
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            Ok(())
        }
        TimerAction::Run {
            work_secs,
            break_secs,
            phases,
        } => {
            let engine = TimerEngine::with_presets(
                work_secs.unwrap_or(config.timer.work_secs),
                break_secs.unwrap_or(config.timer.break_secs),
            );
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            rt.block_on(run_session(engine, phases, config.notifications.enabled))
        }
    }
}

async fn run_session(
    mut engine: TimerEngine,
    phases: Option<u32>,
    ring_bell: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    engine.start();
    let mut ticker = Ticker::start();
    let mut ended_phases = 0u32;
    println!(
        "{} phase, {} remaining. Ctrl-C to stop.",
        engine.mode().label(),
        engine.format_remaining()
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                engine.pause();
                drop(ticker);
                println!();
                println!(
                    "Paused at {} ({} phase)",
                    engine.format_remaining(),
                    engine.mode().label()
                );
                return Ok(());
            }
            tick = ticker.tick() => {
                if tick.is_none() {
                    return Ok(());
                }
                match engine.tick() {
                    Some(Event::PhaseEnded { message, .. }) => {
                        println!();
                        if ring_bell {
                            print!("\x07");
                        }
                        println!("{message}");
                        ended_phases += 1;
                        if let Some(limit) = phases {
                            if ended_phases >= limit {
                                return Ok(());
                            }
                        }
                        // The engine stopped at the flip; tear the tick
                        // source down before starting the next phase.
                        drop(ticker);
                        engine.start();
                        ticker = Ticker::start();
                    }
                    _ => {
                        print!("\r{} {}", engine.mode().label(), engine.format_remaining());
                        std::io::stdout().flush()?;
                    }
                }
            }
        }
    }
}
