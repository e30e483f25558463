//! AnimalKit - random animal pictures and facts
//!
//! This crate wraps three public JSON APIs and normalizes their
//! responses into plain strings:
//!
//! - dog.ceo for dog pictures
//! - thecatapi.com for cat pictures
//! - meowfacts for cat facts
//!
//! ## Fetcher System
//!
//! Each remote endpoint is handled by a [`Fetcher`]. The
//! [`FetcherRegistry`] maps an (animal, resource) pair to the fetcher
//! that serves it, and [`AnimalClient`] routes caller-supplied animal
//! names through the registry.
//!
//! ```no_run
//! # async fn run() -> Result<(), animalkit::AnimalError> {
//! let url = animalkit::picture("Cat").await?;
//! let fact = animalkit::fact("cat").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
mod error;
pub mod fetchers;
mod types;

pub use client::{
    fact, picture, AnimalClient, AnimalClientBuilder, ClientOptions, Endpoints, DEFAULT_TIMEOUT,
};
pub use error::AnimalError;
pub use fetchers::{CatFactFetcher, CatPictureFetcher, DogPictureFetcher, Fetcher, FetcherRegistry};
pub use types::{Animal, Resource, Subject};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = concat!("AnimalKit/", env!("CARGO_PKG_VERSION"));

/// Animals understood by [`picture`] and [`fact`]
pub const SUPPORTED_ANIMALS: [&str; 2] = ["dog", "cat"];

/// Returned by [`fact`] for dogs; there is no dog fact API
pub const DOG_FACT_UNAVAILABLE: &str = "Dog facts are currently unavailable.";
