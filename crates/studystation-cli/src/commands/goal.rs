//! Streak goal commands.

use clap::Subcommand;
use studystation_core::{CheckIn, GoalBook, Store};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Add a goal
    Add {
        /// Goal title
        title: String,
    },
    /// List goals as JSON
    List,
    /// Check in for today
    Checkin {
        /// Goal id
        id: u64,
    },
    /// Delete a goal (asks for confirmation)
    Delete {
        /// Goal id
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut goals = GoalBook::load(&store)?;

    match action {
        GoalAction::Add { title } => {
            // Empty input is a silent no-op, not an error.
            if let Some(id) = goals.add_goal(&title)? {
                println!("Goal added: {id}");
            }
        }
        GoalAction::List => {
            println!("{}", serde_json::to_string_pretty(goals.goals())?);
        }
        GoalAction::Checkin { id } => match goals.check_in(id)? {
            CheckIn::Recorded { streak } => println!("Checked in! Streak: {streak} day(s)"),
            CheckIn::AlreadyToday => println!("Already checked in today"),
            CheckIn::NotFound => println!("No goal with id {id}"),
        },
        GoalAction::Delete { id, yes } => {
            let Some(goal) = goals.get(id) else {
                println!("No goal with id {id}");
                return Ok(());
            };
            let confirmed = yes || confirm(&format!("Delete goal '{}'?", goal.title))?;
            if !confirmed {
                // Unconfirmed deletion is simply not performed.
                println!("Aborted");
                return Ok(());
            }
            goals.delete_goal(id)?;
            println!("Goal deleted: {id}");
        }
    }
    Ok(())
}

fn confirm(prompt: &str) -> std::io::Result<bool> {
    use std::io::{BufRead, Write};
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
