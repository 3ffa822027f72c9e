use std::path::PathBuf;

use clap::Parser;
use skull_textures::ResolverConfig;

use crate::commands::Commands;
use crate::AppError;

#[derive(Parser, Debug)]
#[clap(name = "skull-cli")]
#[clap(about = "Resolve and inspect player head textures", long_about = None)]
pub struct Cli {
    #[clap(
        long,
        global = true,
        value_parser,
        help = "TOML file with session server settings"
    )]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn load_config(&self) -> Result<ResolverConfig, AppError> {
        match &self.config {
            Some(path) => ResolverConfig::load(path)
                .map_err(|e| AppError::ConfigLoadError(e.to_string())),
            None => Ok(ResolverConfig::default()),
        }
    }
}
