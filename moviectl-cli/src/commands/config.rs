use anyhow::Result;
use clap::{Parser, Subcommand};

use moviectl_core::MoviectlConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective config (file + environment) as TOML, password masked
    Show,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", MoviectlConfig::config_path().display());
            Ok(())
        }
        ConfigCommands::Show => {
            let config = MoviectlConfig::load()?;
            print!("{}", config.to_masked_toml()?);
            Ok(())
        }
    }
}
