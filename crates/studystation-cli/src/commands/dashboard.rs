//! Screen rendering through the tab router.

use chrono::Local;
use clap::ValueEnum;
use studystation_core::{remedy, App, Config, GoalBook, Store, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Home,
    Life,
    Study,
    Goals,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Home => Tab::Home,
            TabArg::Life => Tab::Life,
            TabArg::Study => Tab::Study,
            TabArg::Goals => Tab::Goals,
        }
    }
}

pub fn run(tab: TabArg) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let config = Config::load_or_default();
    let mut app = App::new(&store, &config)?;
    app.set_tab(tab.into());
    render(&app);
    Ok(())
}

fn render(app: &App) {
    println!("== {} ==", app.tab().title());
    match app.tab() {
        Tab::Home => render_home(app),
        Tab::Life => render_life(),
        Tab::Study => render_study(app),
        Tab::Goals => render_goals(app),
    }
}

fn render_home(app: &App) {
    let now = Local::now().naive_local();
    let open = app.tasks.items().iter().filter(|t| !t.done).count();
    println!(
        "{}: {} day(s) left",
        app.exam.name(),
        app.exam.days_left_display(now)
    );
    println!("Open tasks: {open} of {}", app.tasks.items().len());
    println!("Goals tracked: {}", app.goals.goals().len());
    println!();
    println!("Screens: home, life, study, goals");
}

fn render_life() {
    println!("How do you feel right now?");
    for p in &remedy::PRESCRIPTIONS {
        println!("  {} {}", p.icon, p.mood);
    }
    println!();
    println!("Run `studystation remedy show <mood>` for the prescription.");
}

fn render_study(app: &App) {
    let now = Local::now().naive_local();
    println!(
        "{}: {} day(s) left",
        app.exam.name(),
        app.exam.days_left_display(now)
    );
    println!(
        "Timer: {} phase, {} ({})",
        app.timer.mode().label(),
        app.timer.format_remaining(),
        if app.timer.is_running() { "running" } else { "idle" }
    );
    println!();
    if app.tasks.items().is_empty() {
        println!("No tasks yet. Plan the day!");
    }
    for item in app.tasks.items() {
        let mark = if item.done { "x" } else { " " };
        println!("  [{mark}] {:>3}  {}", item.id, item.text);
    }
}

fn render_goals(app: &App) {
    if app.goals.goals().is_empty() {
        println!("No goals yet. Add one to start a streak.");
    }
    for goal in app.goals.goals() {
        let today = if GoalBook::is_checked_in_today(goal) {
            "  (done today)"
        } else {
            ""
        };
        let last = goal.last_date.as_deref().unwrap_or("never");
        println!(
            "  {:>3}  {}  streak {} day(s), last {}{}",
            goal.id, goal.title, goal.streak, last, today
        );
    }
}
