//! Mood first-aid commands.

use clap::Subcommand;
use studystation_core::remedy;

#[derive(Subcommand)]
pub enum RemedyAction {
    /// List known moods
    List,
    /// Show the prescription for a mood
    Show {
        /// Mood name, e.g. "anxious"
        mood: String,
    },
}

pub fn run(action: RemedyAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RemedyAction::List => {
            for p in &remedy::PRESCRIPTIONS {
                println!("{} {:16} {}", p.icon, p.mood, p.title);
            }
        }
        RemedyAction::Show { mood } => {
            let Some(p) = remedy::find(&mood) else {
                let known: Vec<_> = remedy::moods().collect();
                return Err(
                    format!("unknown mood '{mood}', expected one of: {}", known.join(", "))
                        .into(),
                );
            };
            println!("{} {}", p.icon, p.title);
            println!();
            println!("{}", p.content);
            println!();
            println!("Action plan: {}", p.action);
        }
    }
    Ok(())
}
