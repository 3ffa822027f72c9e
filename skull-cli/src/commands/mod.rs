use clap::Subcommand;
use serde::Serialize;
use skull_textures::NotFoundReason;
use uuid::Uuid;

use crate::AppError;

mod decode;
mod encode;
mod fetch;
mod identity;
mod profile;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Encode(encode::Encode),
    Decode(decode::Decode),
    Identity(identity::Identity),
    Fetch(fetch::Fetch),
    Profile(profile::Profile),
}

pub(crate) fn parse_player_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::InvalidPlayerId(raw.to_owned()))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A missing texture is not a failure: log it and leave a short note.
pub(crate) fn note_absence(what: &str, reason: NotFoundReason) {
    log::info!("No texture for {} ({:?})", what, reason);
    eprintln!("note: no texture found for {}", what);
}
