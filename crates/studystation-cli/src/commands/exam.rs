//! Exam countdown commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studystation_core::error::ValidationError;
use studystation_core::{ExamCountdown, Store};

#[derive(Subcommand)]
pub enum ExamAction {
    /// Show the exam name and days left
    Show,
    /// Set the exam name
    SetName {
        /// Exam name
        name: String,
    },
    /// Set the exam date
    SetDate {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Clear the exam date
    ClearDate,
}

pub fn run(action: ExamAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut exam = ExamCountdown::load(&store)?;

    match action {
        ExamAction::Show => {
            let now = Local::now().naive_local();
            println!(
                "{}: {} day(s) left",
                exam.name(),
                exam.days_left_display(now)
            );
        }
        ExamAction::SetName { name } => {
            exam.set_name(&name)?;
            println!("Exam name set: {name}");
        }
        ExamAction::SetDate { date } => {
            let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate(date.clone()))?;
            exam.set_date(parsed)?;
            println!("Exam date set: {date}");
        }
        ExamAction::ClearDate => {
            exam.clear_date()?;
            println!("Exam date cleared");
        }
    }
    Ok(())
}
