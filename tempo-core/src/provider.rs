use crate::{config::Config, model::ProviderPayload, provider::hg::HgBrasilProvider};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod hg;

/// Errors produced while fetching a payload from the weather service.
///
/// The display collapses all of these to the same empty state, but the
/// taxonomy stays distinct for logging and for callers that care.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the weather service")]
    Network(#[source] reqwest::Error),

    #[error("weather service returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse the weather service response")]
    MalformedPayload(#[source] serde_json::Error),
}

/// Source of raw weather payloads.
///
/// The single production implementation is [`HgBrasilProvider`]; the trait
/// exists so tests can point the session at a fixture endpoint.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self) -> Result<ProviderPayload, FetchError>;
}

/// Construct the production provider from configuration.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(HgBrasilProvider::new(config))
}
