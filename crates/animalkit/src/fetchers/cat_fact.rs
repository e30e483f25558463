//! meowfacts fetcher

use crate::error::AnimalError;
use crate::fetchers::{decode, get_body, Fetcher};
use crate::types::{Animal, Resource, Subject};
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// Default meowfacts endpoint
pub const CAT_FACT_URL: &str = "https://meowfacts.herokuapp.com/";

/// Fetches a random cat fact from meowfacts
pub struct CatFactFetcher {
    endpoint: Url,
}

impl CatFactFetcher {
    /// Create a fetcher for the given endpoint
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }
}

#[derive(Debug, Deserialize)]
struct CatFactResponse {
    data: Vec<String>,
}

#[async_trait]
impl Fetcher for CatFactFetcher {
    fn name(&self) -> &'static str {
        "cat_fact"
    }

    fn subject(&self) -> Subject {
        Subject::CatFact
    }

    fn matches(&self, animal: Animal, resource: Resource) -> bool {
        animal == Animal::Cat && resource == Resource::Fact
    }

    fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(&self, http: &reqwest::Client) -> Result<String, AnimalError> {
        let body = get_body(http, &self.endpoint, self.subject()).await?;
        let response: CatFactResponse = decode(&body, self.subject())?;

        response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AnimalError::parse(self.subject(), "Invalid cat fact API response format."))
    }
}
