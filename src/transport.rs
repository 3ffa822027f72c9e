use std::time::Duration;

use url::Url;

use crate::config::ResolverConfig;
use crate::Result;

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok<S: Into<String>>(body: S) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Statuses worth asking again for: rate limiting and server errors.
    pub fn is_transient(&self) -> bool {
        self.status == 429 || (500..600).contains(&self.status)
    }
}

/// Blocking GET against the session server.
///
/// An `Err` means the exchange did not complete (refused connection,
/// timeout, broken body) and is retried by the resolver. Any completed
/// exchange is returned as `Ok`, whatever its status.
pub trait ProfileTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse>;
}

impl<T: ProfileTransport + ?Sized> ProfileTransport for &T {
    fn get(&self, url: &Url) -> Result<HttpResponse> {
        (**self).get(url)
    }
}

/// Transport backed by `reqwest`'s blocking client.
///
/// The client owns an internal runtime, so it must not be created or dropped
/// from within an async context.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl ProfileTransport for HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

/// Pause between lookup attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
