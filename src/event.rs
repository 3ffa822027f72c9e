use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::resolver::{FetchOutcome, Resolver};
use crate::transport::{ProfileTransport, Sleeper};

/// Raised once a background lookup has finished, whatever its outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkinFetchComplete {
    pub id: Uuid,
    pub outcome: FetchOutcome,
}

/// Runs [`Resolver::fetch_by_identifier`] on tokio's blocking pool and
/// announces the result on `events`.
///
/// Must be called from within a tokio runtime. A closed channel is not an
/// error, the outcome is still returned through the handle.
pub fn spawn_fetch<T, S>(
    resolver: Arc<Resolver<T, S>>,
    id: Uuid,
    events: UnboundedSender<SkinFetchComplete>,
) -> JoinHandle<FetchOutcome>
where
    T: ProfileTransport + Send + Sync + 'static,
    S: Sleeper + Send + Sync + 'static,
{
    tokio::task::spawn_blocking(move || {
        let outcome = resolver.fetch_by_identifier(id);
        let event = SkinFetchComplete {
            id,
            outcome: outcome.clone(),
        };
        if events.send(event).is_err() {
            log::debug!("Nobody is listening for the lookup of {}", id);
        }
        outcome
    })
}
