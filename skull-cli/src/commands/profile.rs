use skull_textures::{
    apply, Applied, ItemStack, Resolver, ResolverConfig, SkinSource,
    TexturePayload,
};

use crate::commands::{note_absence, parse_player_id, print_json};
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "profile", about = "Build the profile of a textured player head")]
pub struct Profile {
    #[clap(long, help = "UUID of the player whose skin to use")]
    uuid: Option<String>,
    #[clap(long, help = "URL of the skin image")]
    url: Option<String>,
    #[clap(long, help = "Base64 texture payload")]
    payload: Option<String>,
}

impl Profile {
    pub fn run(&self, config: ResolverConfig) -> Result<(), AppError> {
        let source = self.source()?;
        let resolver = Resolver::new(config)?;
        let mut head = ItemStack::player_head();

        match apply(&mut head, source, &resolver)? {
            Applied::Attached(_) => print_json(&head),
            Applied::Unchanged(reason) => {
                note_absence(&self.describe(), reason);
                Ok(())
            }
        }
    }

    fn describe(&self) -> String {
        self.uuid
            .as_deref()
            .or(self.url.as_deref())
            .unwrap_or("payload")
            .to_owned()
    }

    fn source(&self) -> Result<SkinSource, AppError> {
        match (&self.uuid, &self.url, &self.payload) {
            (Some(uuid), None, None) => {
                Ok(SkinSource::Player(parse_player_id(uuid)?))
            }
            (None, Some(url), None) => Ok(SkinSource::Url(url.to_owned())),
            (None, None, Some(payload)) => {
                Ok(SkinSource::Payload(TexturePayload::new(payload.trim())))
            }
            _ => Err(AppError::InvalidSource),
        }
    }
}
