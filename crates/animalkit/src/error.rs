//! Error types for AnimalKit

use crate::types::{Resource, Subject};
use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can occur while fetching pictures or facts
#[derive(Debug, Error)]
pub enum AnimalError {
    /// Transport-level failure: DNS, connect, timeout or non-2xx status
    #[error("Failed to fetch {subject}: {reason}")]
    FetchFailed {
        subject: Subject,
        /// `source` and every cause below it, joined with ": "
        reason: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response arrived but is not the JSON shape the API documents
    #[error("Failed to parse {subject} API response: {reason}")]
    ParseFailed { subject: Subject, reason: String },

    /// Animal name outside the supported set (echoes the caller's input)
    #[error("{} for '{animal}' are not supported yet.", .resource.title())]
    UnsupportedAnimal { resource: Resource, animal: String },

    /// Endpoint override is not an http(s) URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),
}

impl AnimalError {
    /// Wrap a reqwest error for the given subject
    pub fn fetch(subject: Subject, source: reqwest::Error) -> Self {
        let reason = error_chain(&source);
        AnimalError::FetchFailed {
            subject,
            reason,
            source,
        }
    }

    /// Build a parse error for the given subject
    pub fn parse(subject: Subject, reason: impl Into<String>) -> Self {
        AnimalError::ParseFailed {
            subject,
            reason: reason.into(),
        }
    }

    /// Subject of the failed fetch, if this error came from a fetcher
    pub fn subject(&self) -> Option<Subject> {
        match self {
            AnimalError::FetchFailed { subject, .. } | AnimalError::ParseFailed { subject, .. } => {
                Some(*subject)
            }
            _ => None,
        }
    }
}

/// Render an error and its causes; reqwest's Display omits the cause
fn error_chain(err: &dyn StdError) -> String {
    let mut reason = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !reason.ends_with(&text) {
            reason.push_str(": ");
            reason.push_str(&text);
        }
        cause = inner.source();
    }
    reason
}
