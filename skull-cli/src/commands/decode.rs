use skull_textures::TexturePayload;

use crate::commands::print_json;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "decode", about = "Show the texture document of a payload")]
pub struct Decode {
    #[clap(help = "Base64 texture payload")]
    payload: String,
}

impl Decode {
    pub fn run(&self) -> Result<(), AppError> {
        let document = TexturePayload::new(self.payload.trim()).decode()?;
        print_json(&document)
    }
}
