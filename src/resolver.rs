use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::config::ResolverConfig;
use crate::payload::{TextureDocument, TexturePayload};
use crate::transport::{
    HttpResponse, HttpTransport, ProfileTransport, Sleeper, ThreadSleeper,
};
use crate::Result;

/// Why a lookup produced no payload. Neither case is an error for callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The server answered without textures, typical of offline-mode ids.
    Unregistered,
    /// Every attempt failed to reach the server.
    RetriesExhausted,
    /// The configured session server cannot be joined with a profile path.
    BadEndpoint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(TexturePayload),
    NotFound(NotFoundReason),
}

impl FetchOutcome {
    pub fn payload(&self) -> Option<&TexturePayload> {
        match self {
            FetchOutcome::Found(payload) => Some(payload),
            FetchOutcome::NotFound(_) => None,
        }
    }

    pub fn into_payload(self) -> Option<TexturePayload> {
        match self {
            FetchOutcome::Found(payload) => Some(payload),
            FetchOutcome::NotFound(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct SessionProfile {
    #[serde(default)]
    properties: Vec<SessionProperty>,
}

#[derive(Deserialize)]
struct SessionProperty {
    value: String,
}

/// Looks up texture payloads of players on the session server.
///
/// Lookups block the calling thread, including the pauses between retries
/// (ten minutes with the default configuration), so call them from a worker
/// that tolerates it. See [`crate::event::spawn_fetch`].
pub struct Resolver<T = HttpTransport, S = ThreadSleeper> {
    transport: T,
    sleeper: S,
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(transport, ThreadSleeper, config))
    }
}

impl<T: ProfileTransport, S: Sleeper> Resolver<T, S> {
    pub fn with_transport(transport: T, sleeper: S, config: ResolverConfig) -> Self {
        Self {
            transport,
            sleeper,
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the texture payload of player `id`.
    ///
    /// Unreachable servers are retried `max_retries` times, `retry_delay`
    /// apart. A completed exchange without textures is final. Never fails:
    /// the worst case is [`FetchOutcome::NotFound`].
    pub fn fetch_by_identifier(&self, id: Uuid) -> FetchOutcome {
        let url = match self.config.profile_url(&id) {
            Ok(url) => url,
            Err(e) => {
                log::error!(
                    "Cannot build profile URL from {}: {}",
                    self.config.session_server,
                    e
                );
                return FetchOutcome::NotFound(NotFoundReason::BadEndpoint);
            }
        };

        let mut retries_left = self.config.max_retries;
        loop {
            match self.transport.get(&url) {
                Ok(response) if !response.is_transient() => {
                    return match read_textures(&response) {
                        Some(payload) => FetchOutcome::Found(payload),
                        None => {
                            log::info!(
                                "No textures for {} (status {}), it might be an offline-mode player",
                                id,
                                response.status
                            );
                            FetchOutcome::NotFound(NotFoundReason::Unregistered)
                        }
                    };
                }
                Ok(response) => {
                    log::info!(
                        "Session server answered {} for {}, retrying",
                        response.status,
                        id
                    );
                }
                Err(e) => {
                    log::info!("Cannot connect to session server ({}), retrying", e);
                }
            }

            if retries_left == 0 {
                log::warn!(
                    "Lookup of {} failed {} times, aborted",
                    id,
                    self.config.max_retries + 1
                );
                return FetchOutcome::NotFound(NotFoundReason::RetriesExhausted);
            }
            retries_left -= 1;
            self.sleeper.sleep(self.config.retry_delay());
        }
    }
}

fn read_textures(response: &HttpResponse) -> Option<TexturePayload> {
    if !response.is_success() {
        return None;
    }
    let profile: SessionProfile = match serde_json::from_str(&response.body) {
        Ok(profile) => profile,
        Err(e) => {
            log::debug!("Unexpected session profile body: {}", e);
            return None;
        }
    };
    profile
        .properties
        .into_iter()
        .next()
        .map(|property| TexturePayload::new(property.value))
}

/// Builds the payload of a skin hosted at `url` without any network access.
///
/// The URL is embedded in its `url::Url` serialisation: scheme and host are
/// lowercased and a bare host gains a trailing `/`, so `HTTP://Host` is
/// encoded as `http://host/`. Such inputs therefore yield a different
/// payload, and a different synthetic id, than their raw spelling would.
///
/// A malformed URL is an input error and is returned as
/// [`crate::SkullError::InvalidUrl`].
pub fn encode_from_url(url: &str) -> Result<TexturePayload> {
    let url = Url::parse(url)?;
    TexturePayload::encode(&TextureDocument::with_skin(url.as_str()))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use base64::{engine::general_purpose, Engine};
    use rstest::rstest;

    use super::*;
    use crate::transport::mock::{refused, RecordingSleeper, ScriptedTransport};
    use crate::SkullError;

    const NOTCH: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";

    fn resolver(
        transport: ScriptedTransport,
    ) -> Resolver<ScriptedTransport, RecordingSleeper> {
        Resolver::with_transport(
            transport,
            RecordingSleeper::default(),
            ResolverConfig::default(),
        )
    }

    fn notch() -> Uuid {
        Uuid::parse_str(NOTCH).unwrap()
    }

    fn profile_body(value: &str) -> String {
        format!(
            r#"{{"id":"069a79f444e94726a5befca90e38aaf5","name":"Notch","properties":[{{"name":"textures","value":"{}","signature":"c2ln"}}]}}"#,
            value
        )
    }

    #[test]
    fn returns_first_property_value() {
        let resolver = resolver(ScriptedTransport::new(vec![Ok(
            HttpResponse::ok(profile_body("ZXlKMFpYaDBkWEpsY3lJNmUzMTk=")),
        )]));

        let outcome = resolver.fetch_by_identifier(notch());
        assert_eq!(
            outcome.payload().map(|p| p.as_str()),
            Some("ZXlKMFpYaDBkWEpsY3lJNmUzMTk=")
        );
        assert_eq!(resolver.transport.attempts(), 1);
        assert_eq!(
            resolver.transport.urls.lock().unwrap()[0].as_str(),
            format!(
                "https://sessionserver.mojang.com/session/minecraft/profile/{}?unsigned=false",
                NOTCH
            )
        );
    }

    #[test]
    fn gives_up_after_ten_retries() {
        let resolver = resolver(ScriptedTransport::unreachable());

        let outcome = resolver.fetch_by_identifier(notch());
        assert_eq!(
            outcome,
            FetchOutcome::NotFound(NotFoundReason::RetriesExhausted)
        );
        assert_eq!(resolver.transport.attempts(), 11);
        let slept = resolver.sleeper.slept.lock().unwrap();
        assert_eq!(slept.len(), 10);
        assert!(slept.iter().all(|d| *d == Duration::from_secs(60)));
    }

    #[test]
    fn recovers_after_transient_failures() {
        let resolver = resolver(ScriptedTransport::new(vec![
            refused(),
            Ok(HttpResponse {
                status: 503,
                body: String::new(),
            }),
            Ok(HttpResponse::ok(profile_body("dGV4dHVyZXM="))),
        ]));

        let outcome = resolver.fetch_by_identifier(notch());
        assert_eq!(outcome.into_payload().unwrap().as_str(), "dGV4dHVyZXM=");
        assert_eq!(resolver.transport.attempts(), 3);
        assert_eq!(resolver.sleeper.slept.lock().unwrap().len(), 2);
    }

    #[rstest]
    #[case(HttpResponse::ok(r#"{"id":"x","name":"x","properties":[]}"#))]
    #[case(HttpResponse::ok(r#"{"id":"x","name":"x"}"#))]
    #[case(HttpResponse::ok(r#"{"properties":[{"name":"textures"}]}"#))]
    #[case(HttpResponse::ok("not json"))]
    #[case(HttpResponse { status: 204, body: String::new() })]
    #[case(HttpResponse { status: 404, body: String::new() })]
    fn shape_mismatch_is_not_retried(#[case] response: HttpResponse) {
        let resolver = resolver(ScriptedTransport::new(vec![Ok(response)]));

        let outcome = resolver.fetch_by_identifier(notch());
        assert_eq!(outcome, FetchOutcome::NotFound(NotFoundReason::Unregistered));
        assert_eq!(resolver.transport.attempts(), 1);
        assert!(resolver.sleeper.slept.lock().unwrap().is_empty());
    }

    #[test]
    fn retry_budget_is_configurable() {
        let config = ResolverConfig {
            max_retries: 2,
            retry_delay_secs: 5,
            ..Default::default()
        };
        let resolver = Resolver::with_transport(
            ScriptedTransport::unreachable(),
            RecordingSleeper::default(),
            config,
        );

        resolver.fetch_by_identifier(notch());
        assert_eq!(resolver.transport.attempts(), 3);
        assert_eq!(
            *resolver.sleeper.slept.lock().unwrap(),
            vec![Duration::from_secs(5); 2]
        );
    }

    #[test]
    fn encode_example_url() {
        let payload = encode_from_url("http://textures.example.com/abc").unwrap();
        let expected = general_purpose::STANDARD.encode(
            r#"{"textures":{"SKIN":{"url":"http://textures.example.com/abc"}}}"#,
        );
        assert_eq!(payload.as_str(), expected);
        assert_eq!(
            payload.decode().unwrap().skin_url(),
            Some("http://textures.example.com/abc")
        );
    }

    #[test]
    fn encode_uses_canonical_form() {
        let payload = encode_from_url("HTTP://Textures.Example.com").unwrap();
        assert_eq!(
            payload.decode_json().unwrap(),
            r#"{"textures":{"SKIN":{"url":"http://textures.example.com/"}}}"#
        );
    }

    #[rstest]
    #[case("")]
    #[case("textures.example.com/abc")]
    #[case("http://[::1")]
    fn malformed_url_is_fatal(#[case] url: &str) {
        assert!(matches!(
            encode_from_url(url),
            Err(SkullError::InvalidUrl(_))
        ));
    }
}
