//! To-do list commands.

use clap::Subcommand;
use studystation_core::{Store, TaskList};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task text
        text: String,
    },
    /// List tasks as JSON
    List,
    /// Toggle a task's done flag
    Toggle {
        /// Task id
        id: u64,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: u64,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut tasks = TaskList::load(&store)?;

    match action {
        TaskAction::Add { text } => {
            // Empty input is a silent no-op, not an error.
            if let Some(id) = tasks.add(&text)? {
                println!("Task added: {id}");
            }
        }
        TaskAction::List => {
            println!("{}", serde_json::to_string_pretty(tasks.items())?);
        }
        TaskAction::Toggle { id } => {
            if tasks.toggle(id)? {
                println!("Task toggled: {id}");
            } else {
                println!("No task with id {id}");
            }
        }
        TaskAction::Delete { id } => {
            if tasks.delete(id)? {
                println!("Task deleted: {id}");
            } else {
                println!("No task with id {id}");
            }
        }
    }
    Ok(())
}
