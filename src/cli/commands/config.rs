use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use crate::cli::parser::Commands;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        if *init {
            let written = Config::init(path)?;
            success(format!("Config file: {}", written.display()));
        }

        if *print_config || !*init {
            let shown = path
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::config_file);
            info(format!("Configuration file: {}", shown.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }
    }

    Ok(())
}
