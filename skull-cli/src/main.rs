use clap::Parser;

mod cli;
mod commands;
mod error;

use cli::Cli;
use commands::Commands;
pub(crate) use error::AppError;

fn main() {
    env_logger::init();

    let args = Cli::parse();
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let result = match &args.command {
        Commands::Encode(encode) => encode.run(),
        Commands::Decode(decode) => decode.run(),
        Commands::Identity(identity) => identity.run(),
        Commands::Fetch(fetch) => fetch.run(config),
        Commands::Profile(profile) => profile.run(config),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
