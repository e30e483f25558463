//! thecatapi.com image search fetcher

use crate::error::AnimalError;
use crate::fetchers::{decode, get_body, Fetcher};
use crate::types::{Animal, Resource, Subject};
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// Default thecatapi.com endpoint
pub const CAT_PICTURE_URL: &str = "https://api.thecatapi.com/v1/images/search";

/// Fetches a random cat picture URL from thecatapi.com
///
/// Expects a non-empty array of image objects; the first one's `url` wins.
pub struct CatPictureFetcher {
    endpoint: Url,
}

impl CatPictureFetcher {
    /// Create a fetcher for the given endpoint
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }
}

/// thecatapi.com image entry (partial)
#[derive(Debug, Deserialize)]
struct CatImage {
    url: String,
}

#[async_trait]
impl Fetcher for CatPictureFetcher {
    fn name(&self) -> &'static str {
        "cat_picture"
    }

    fn subject(&self) -> Subject {
        Subject::CatPicture
    }

    fn matches(&self, animal: Animal, resource: Resource) -> bool {
        animal == Animal::Cat && resource == Resource::Picture
    }

    fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(&self, http: &reqwest::Client) -> Result<String, AnimalError> {
        let body = get_body(http, &self.endpoint, self.subject()).await?;
        let images: Vec<CatImage> = decode(&body, self.subject())?;

        images
            .into_iter()
            .next()
            .map(|image| image.url)
            .ok_or_else(|| {
                AnimalError::parse(self.subject(), "Invalid cat picture API response format.")
            })
    }
}
