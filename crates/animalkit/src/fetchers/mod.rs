//! Fetcher system for the remote animal APIs
//!
//! Design: each fetcher owns one endpoint and knows which
//! (animal, resource) pair it serves. FetcherRegistry dispatches
//! to the first matching fetcher.

mod cat_fact;
mod cat_picture;
mod dog_picture;

pub use cat_fact::{CatFactFetcher, CAT_FACT_URL};
pub use cat_picture::{CatPictureFetcher, CAT_PICTURE_URL};
pub use dog_picture::{DogPictureFetcher, DOG_PICTURE_URL};

use crate::client::Endpoints;
use crate::error::AnimalError;
use crate::types::{Animal, Resource, Subject};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

/// Trait for single-endpoint fetchers
///
/// A fetcher performs exactly one GET against its endpoint, validates
/// the JSON shape and extracts a single string.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Unique identifier for this fetcher (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Subject used in error messages
    fn subject(&self) -> Subject;

    /// Returns true if this fetcher serves the given animal and resource
    fn matches(&self, animal: Animal, resource: Resource) -> bool;

    /// Endpoint this fetcher requests
    fn endpoint(&self) -> &Url;

    /// Fetch and extract the value
    async fn fetch(&self, http: &reqwest::Client) -> Result<String, AnimalError>;
}

/// Registry of fetchers that dispatches to the appropriate handler
///
/// Fetchers are checked in registration order.
pub struct FetcherRegistry {
    fetchers: Vec<Box<dyn Fetcher>>,
}

impl Default for FetcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FetcherRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            fetchers: Vec::new(),
        }
    }

    /// Create a registry with the built-in fetchers pointed at `endpoints`
    ///
    /// Includes (in order of priority):
    /// 1. DogPictureFetcher
    /// 2. CatPictureFetcher
    /// 3. CatFactFetcher
    pub fn with_endpoints(endpoints: &Endpoints) -> Result<Self, AnimalError> {
        let mut registry = Self::new();
        registry.register(Box::new(DogPictureFetcher::new(parse_endpoint(
            &endpoints.dog_picture,
        )?)));
        registry.register(Box::new(CatPictureFetcher::new(parse_endpoint(
            &endpoints.cat_picture,
        )?)));
        registry.register(Box::new(CatFactFetcher::new(parse_endpoint(
            &endpoints.cat_fact,
        )?)));
        Ok(registry)
    }

    /// Register a fetcher
    pub fn register(&mut self, fetcher: Box<dyn Fetcher>) {
        self.fetchers.push(fetcher);
    }

    /// Find the first fetcher serving `animal` and `resource`
    pub fn find(&self, animal: Animal, resource: Resource) -> Option<&dyn Fetcher> {
        self.fetchers
            .iter()
            .find(|fetcher| fetcher.matches(animal, resource))
            .map(|fetcher| &**fetcher)
    }
}

/// Parse an endpoint, accepting only http:// and https:// URLs
fn parse_endpoint(raw: &str) -> Result<Url, AnimalError> {
    let url = Url::parse(raw).map_err(|_| AnimalError::InvalidEndpoint(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(AnimalError::InvalidEndpoint(raw.to_string())),
    }
}

/// GET `url` and return the body text
///
/// Transport errors, non-2xx statuses and body read failures all map
/// to [`AnimalError::FetchFailed`].
pub(crate) async fn get_body(
    http: &reqwest::Client,
    url: &Url,
    subject: Subject,
) -> Result<String, AnimalError> {
    let response = http
        .get(url.clone())
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| {
            tracing::warn!(%subject, url = %url, error = %e, "Request failed");
            AnimalError::fetch(subject, e)
        })?;

    response.text().await.map_err(|e| {
        tracing::warn!(%subject, url = %url, error = %e, "Failed to read response body");
        AnimalError::fetch(subject, e)
    })
}

/// Decode and shape-check a JSON body in one step
///
/// Non-JSON bodies and shape mismatches both become
/// [`AnimalError::ParseFailed`] carrying serde_json's message.
pub(crate) fn decode<T: DeserializeOwned>(body: &str, subject: Subject) -> Result<T, AnimalError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(%subject, error = %e, "Unexpected response body");
        AnimalError::parse(subject, e.to_string())
    })
}
