use uuid::Uuid;

use crate::payload::TexturePayload;
use crate::profile::Profile;
use crate::resolver::{encode_from_url, FetchOutcome, NotFoundReason, Resolver};
use crate::target::{Placeable, SkullTarget};
use crate::transport::{ProfileTransport, Sleeper};
use crate::{Result, SkullError};

/// Where the texture of a skull comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkinSource {
    /// Looked up on the session server.
    Player(Uuid),
    /// Encoded locally.
    Url(String),
    Payload(TexturePayload),
}

impl From<Uuid> for SkinSource {
    fn from(id: Uuid) -> Self {
        SkinSource::Player(id)
    }
}

impl From<TexturePayload> for SkinSource {
    fn from(payload: TexturePayload) -> Self {
        SkinSource::Payload(payload)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// A profile with this synthetic id was attached.
    Attached(Uuid),
    /// No texture was available, the target was left as it was.
    Unchanged(NotFoundReason),
}

/// Gives `target` the skin of `source`.
///
/// Fails with [`SkullError::NotASkull`] before resolving anything if the
/// target cannot carry a profile. Player lookups block, see
/// [`Resolver::fetch_by_identifier`].
pub fn apply<G, T, S>(
    target: &mut G,
    source: SkinSource,
    resolver: &Resolver<T, S>,
) -> Result<Applied>
where
    G: SkullTarget + ?Sized,
    T: ProfileTransport,
    S: Sleeper,
{
    if !target.is_skull() {
        return Err(SkullError::NotASkull);
    }

    match resolve(source, resolver)? {
        FetchOutcome::Found(payload) => {
            apply_payload(target, &payload).map(Applied::Attached)
        }
        FetchOutcome::NotFound(reason) => {
            log::debug!("No texture to apply ({:?}), skull left as is", reason);
            Ok(Applied::Unchanged(reason))
        }
    }
}

/// Turns `block` into a player head, then applies `source` to it.
///
/// URL sources are encoded first, so a malformed URL leaves the block as it
/// was. For player sources the block is converted even when no texture
/// turns up.
pub fn place_and_apply<B, T, S>(
    block: &mut B,
    source: SkinSource,
    resolver: &Resolver<T, S>,
) -> Result<Applied>
where
    B: Placeable + ?Sized,
    T: ProfileTransport,
    S: Sleeper,
{
    let source = match source {
        SkinSource::Url(url) => SkinSource::Payload(encode_from_url(&url)?),
        other => other,
    };
    block.set_to_skull()?;
    apply(block, source, resolver)
}

/// Attaches a profile built from `payload`, returning its synthetic id.
pub fn apply_payload<G>(target: &mut G, payload: &TexturePayload) -> Result<Uuid>
where
    G: SkullTarget + ?Sized,
{
    let profile = Profile::from_payload(payload);
    let id = profile.id;
    target.attach_profile(profile)?;
    log::debug!("Attached skull profile {}", id);
    Ok(id)
}

fn resolve<T, S>(source: SkinSource, resolver: &Resolver<T, S>) -> Result<FetchOutcome>
where
    T: ProfileTransport,
    S: Sleeper,
{
    let outcome = match source {
        SkinSource::Player(id) => resolver.fetch_by_identifier(id),
        SkinSource::Url(url) => FetchOutcome::Found(encode_from_url(&url)?),
        SkinSource::Payload(payload) => FetchOutcome::Found(payload),
    };
    Ok(outcome)
}
