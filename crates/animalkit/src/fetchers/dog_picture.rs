//! dog.ceo random image fetcher

use crate::error::AnimalError;
use crate::fetchers::{decode, get_body, Fetcher};
use crate::types::{Animal, Resource, Subject};
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// Default dog.ceo endpoint
pub const DOG_PICTURE_URL: &str = "https://dog.ceo/api/breeds/image/random";

/// Fetches a random dog picture URL from dog.ceo
///
/// Expects `{"status": "success", "message": "<url>"}`.
pub struct DogPictureFetcher {
    endpoint: Url,
}

impl DogPictureFetcher {
    /// Create a fetcher for the given endpoint
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }
}

/// dog.ceo response (partial)
#[derive(Debug, Deserialize)]
struct DogImageResponse {
    status: String,
    message: Option<String>,
}

impl DogImageResponse {
    fn into_url(self) -> Option<String> {
        if self.status != "success" {
            return None;
        }
        self.message
    }
}

#[async_trait]
impl Fetcher for DogPictureFetcher {
    fn name(&self) -> &'static str {
        "dog_picture"
    }

    fn subject(&self) -> Subject {
        Subject::DogPicture
    }

    fn matches(&self, animal: Animal, resource: Resource) -> bool {
        animal == Animal::Dog && resource == Resource::Picture
    }

    fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(&self, http: &reqwest::Client) -> Result<String, AnimalError> {
        let body = get_body(http, &self.endpoint, self.subject()).await?;
        let response: DogImageResponse = decode(&body, self.subject())?;

        response.into_url().ok_or_else(|| {
            AnimalError::parse(
                self.subject(),
                "Dog API did not return a successful response or 'message' key is missing.",
            )
        })
    }
}
