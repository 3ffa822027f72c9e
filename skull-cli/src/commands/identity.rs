use skull_textures::{synthetic_id, TexturePayload};

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "identity",
    about = "Print the profile id a skull with this payload gets"
)]
pub struct Identity {
    #[clap(help = "Base64 texture payload")]
    payload: String,
}

impl Identity {
    pub fn run(&self) -> Result<(), AppError> {
        let payload = TexturePayload::new(self.payload.trim());
        println!("{}", synthetic_id(&payload));
        Ok(())
    }
}
