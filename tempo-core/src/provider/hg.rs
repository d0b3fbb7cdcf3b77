use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{config::Config, model::ProviderPayload};

use super::{FetchError, WeatherProvider};

/// HG Brasil weather client.
///
/// Issues a single `GET <endpoint>?key=<api_key>&city_name=<city>` and
/// unwraps the `{ results: ... }` envelope of the response body.
#[derive(Debug, Clone)]
pub struct HgBrasilProvider {
    endpoint: String,
    api_key: String,
    city: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct HgEnvelope {
    results: ProviderPayload,
}

impl HgBrasilProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            city: config.city.clone(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for HgBrasilProvider {
    async fn fetch(&self) -> Result<ProviderPayload, FetchError> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("city_name", self.city.as_str()),
            ])
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Network)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let envelope: HgEnvelope =
            serde_json::from_str(&body).map_err(FetchError::MalformedPayload)?;

        Ok(envelope.results)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
