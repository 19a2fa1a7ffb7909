use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studystation", version, about = "Study Station CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exam countdown
    Exam {
        #[command(subcommand)]
        action: commands::exam::ExamAction,
    },
    /// To-do list
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Streak goals
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Work/break countdown timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Mood first-aid lookup
    Remedy {
        #[command(subcommand)]
        action: commands::remedy::RemedyAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Render one of the app screens
    Dashboard {
        /// Screen to render
        #[arg(long, value_enum, default_value = "home")]
        tab: commands::dashboard::TabArg,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Exam { action } => commands::exam::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Remedy { action } => commands::remedy::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Dashboard { tab } => commands::dashboard::run(tab),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
