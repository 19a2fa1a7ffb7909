//! Configuration commands.

use clap::Subcommand;
use studystation_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a value by dot-separated key
    Get {
        /// Key, e.g. timer.work_secs
        key: String,
    },
    /// Set a value by dot-separated key
    Set {
        /// Key, e.g. timer.work_secs
        key: String,
        /// New value
        value: String,
    },
    /// Print the whole configuration as TOML
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown configuration key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
