//! # Skull textures
//!
//! Resolves player ids and texture URLs into texture payloads and applies
//! them to player heads.
//!
//! ```no_run
//! use skull_textures::{apply, ItemStack, Resolver, ResolverConfig, SkinSource};
//!
//! let resolver = Resolver::new(ResolverConfig::default())?;
//! let mut head = ItemStack::player_head();
//! apply(
//!     &mut head,
//!     SkinSource::Url("http://textures.minecraft.net/texture/abc".into()),
//!     &resolver,
//! )?;
//! # Ok::<(), skull_textures::SkullError>(())
//! ```

pub mod apply;
pub mod config;
mod errors;
pub mod event;
pub mod id;
pub mod payload;
pub mod profile;
pub mod resolver;
pub mod target;
pub mod transport;

pub use apply::{apply, apply_payload, place_and_apply, Applied, SkinSource};
pub use config::ResolverConfig;
pub use errors::{Result, SkullError};
pub use event::{spawn_fetch, SkinFetchComplete};
pub use id::synthetic_id;
pub use payload::{TextureDocument, TexturePayload};
pub use profile::{Profile, ProfileProperty, TEXTURES_PROPERTY};
pub use resolver::{encode_from_url, FetchOutcome, NotFoundReason, Resolver};
pub use target::{
    BlockPos, BlockState, ItemStack, Material, Placeable, PlacedBlock,
    SkullTarget, World,
};
pub use transport::{
    HttpResponse, HttpTransport, ProfileTransport, Sleeper, ThreadSleeper,
};
