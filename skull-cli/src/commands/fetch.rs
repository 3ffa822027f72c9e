use skull_textures::{FetchOutcome, Resolver, ResolverConfig};
use uuid::Uuid;

use crate::commands::{note_absence, parse_player_id};
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "fetch",
    about = "Fetch the texture payload of a player (blocks while retrying)"
)]
pub struct Fetch {
    #[clap(help = "UUID of the player")]
    uuid: String,
}

impl Fetch {
    pub fn run(&self, config: ResolverConfig) -> Result<(), AppError> {
        let id = parse_player_id(&self.uuid)?;
        let resolver = Resolver::new(config)?;

        if let Some(line) = render(id, resolver.fetch_by_identifier(id)) {
            println!("{}", line);
        }
        Ok(())
    }
}

/// Line to print for `outcome`, if any. Absence is only noted.
fn render(id: Uuid, outcome: FetchOutcome) -> Option<String> {
    match outcome {
        FetchOutcome::Found(payload) => Some(payload.into_string()),
        FetchOutcome::NotFound(reason) => {
            note_absence(&id.to_string(), reason);
            None
        }
    }
}
