use skull_textures::encode_from_url;

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "encode", about = "Encode a skin URL into a texture payload")]
pub struct Encode {
    #[clap(help = "URL of the skin image")]
    url: String,
}

impl Encode {
    pub fn run(&self) -> Result<(), AppError> {
        let payload = encode_from_url(&self.url)?;
        println!("{}", payload);
        Ok(())
    }
}
