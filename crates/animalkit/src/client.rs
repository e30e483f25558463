//! Animal facade
//!
//! [`AnimalClient`] routes an animal name to the matching fetcher in
//! [`fetchers`](crate::fetchers). The free functions [`picture`] and
//! [`fact`] use a client with default options.

use crate::error::AnimalError;
use crate::fetchers::{FetcherRegistry, CAT_FACT_URL, CAT_PICTURE_URL, DOG_PICTURE_URL};
use crate::types::{Animal, Resource};
use crate::{DEFAULT_USER_AGENT, DOG_FACT_UNAVAILABLE};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;

/// Connect and overall request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote endpoints, overridable for tests and mirrors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// dog.ceo random image
    pub dog_picture: String,
    /// thecatapi.com image search
    pub cat_picture: String,
    /// meowfacts
    pub cat_fact: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            dog_picture: DOG_PICTURE_URL.to_string(),
            cat_picture: CAT_PICTURE_URL.to_string(),
            cat_fact: CAT_FACT_URL.to_string(),
        }
    }
}

/// Client options
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// Connect and overall request timeout
    pub timeout: Duration,
    /// Remote endpoints
    pub endpoints: Endpoints,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            endpoints: Endpoints::default(),
        }
    }
}

/// Builder for [`AnimalClient`]
#[derive(Debug, Clone, Default)]
pub struct AnimalClientBuilder {
    options: ClientOptions,
}

impl AnimalClientBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.options.user_agent = Some(ua.into());
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Override the dog picture endpoint
    pub fn dog_picture_url(mut self, url: impl Into<String>) -> Self {
        self.options.endpoints.dog_picture = url.into();
        self
    }

    /// Override the cat picture endpoint
    pub fn cat_picture_url(mut self, url: impl Into<String>) -> Self {
        self.options.endpoints.cat_picture = url.into();
        self
    }

    /// Override the cat fact endpoint
    pub fn cat_fact_url(mut self, url: impl Into<String>) -> Self {
        self.options.endpoints.cat_fact = url.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AnimalClient, AnimalError> {
        AnimalClient::with_options(self.options)
    }
}

/// Stateless client for animal pictures and facts
///
/// Holds only configuration and a pooled HTTP client; every call
/// performs a fresh request.
pub struct AnimalClient {
    http: reqwest::Client,
    registry: FetcherRegistry,
}

impl AnimalClient {
    /// Create a client with default options
    pub fn new() -> Result<Self, AnimalError> {
        Self::with_options(ClientOptions::default())
    }

    /// Create a builder
    pub fn builder() -> AnimalClientBuilder {
        AnimalClientBuilder::new()
    }

    /// Create a client with custom options
    pub fn with_options(options: ClientOptions) -> Result<Self, AnimalError> {
        let registry = FetcherRegistry::with_endpoints(&options.endpoints)?;

        let mut headers = HeaderMap::new();
        let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(options.timeout)
            .timeout(options.timeout)
            .build()
            .map_err(AnimalError::ClientBuildError)?;

        Ok(Self { http, registry })
    }

    /// Return a random picture URL for `animal` ("dog" or "cat", any casing)
    pub async fn picture(&self, animal: &str) -> Result<String, AnimalError> {
        self.dispatch(animal, route(animal, Resource::Picture)?).await
    }

    /// Return a fact about `animal` ("dog" or "cat", any casing)
    ///
    /// Dog facts have no remote source; a fixed message is returned
    /// without touching the network.
    pub async fn fact(&self, animal: &str) -> Result<String, AnimalError> {
        self.dispatch(animal, route(animal, Resource::Fact)?).await
    }

    async fn dispatch(&self, animal: &str, route: Route) -> Result<String, AnimalError> {
        let (parsed, resource) = match route {
            Route::Fixed(value) => return Ok(value.to_string()),
            Route::Remote(parsed, resource) => (parsed, resource),
        };

        let fetcher = self
            .registry
            .find(parsed, resource)
            .ok_or_else(|| unsupported(animal, resource))?;

        tracing::debug!(fetcher = fetcher.name(), url = %fetcher.endpoint(), "Using fetcher");
        fetcher.fetch(&self.http).await
    }
}

/// Where a request for `resource` about an animal is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    /// Known answer, no request needed
    Fixed(&'static str),
    /// Served by a fetcher in the registry
    Remote(Animal, Resource),
}

/// Resolve a caller-supplied name without any network or client setup
fn route(animal: &str, resource: Resource) -> Result<Route, AnimalError> {
    let parsed: Animal = animal
        .parse()
        .map_err(|_| unsupported(animal, resource))?;

    match (parsed, resource) {
        (Animal::Dog, Resource::Fact) => Ok(Route::Fixed(DOG_FACT_UNAVAILABLE)),
        _ => Ok(Route::Remote(parsed, resource)),
    }
}

fn unsupported(animal: &str, resource: Resource) -> AnimalError {
    AnimalError::UnsupportedAnimal {
        resource,
        animal: animal.to_string(),
    }
}

/// Fetch a random picture URL using default options
///
/// Unsupported names fail before an HTTP client is built.
pub async fn picture(animal: &str) -> Result<String, AnimalError> {
    let route = route(animal, Resource::Picture)?;
    AnimalClient::new()?.dispatch(animal, route).await
}

/// Fetch a fact using default options
///
/// Dog facts and unsupported names are answered before an HTTP
/// client is built.
pub async fn fact(animal: &str) -> Result<String, AnimalError> {
    match route(animal, Resource::Fact)? {
        Route::Fixed(value) => Ok(value.to_string()),
        remote => AnimalClient::new()?.dispatch(animal, remote).await,
    }
}
