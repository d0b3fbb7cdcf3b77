use chrono::Utc;

use crate::{
    model::WeatherSnapshot,
    provider::WeatherProvider,
    state::DisplayState,
};

/// One fetch cycle of the display.
///
/// A session starts in `Loading`, performs at most one fetch, and ends in
/// either `Loaded` or `Empty`. There is no retry, no polling and no
/// refresh; a new cycle means a new session.
#[derive(Debug)]
pub struct Session {
    provider: Box<dyn WeatherProvider>,
    state: DisplayState,
}

impl Session {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            state: DisplayState::Loading,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Run the session's single fetch.
    ///
    /// Any failure (network, non-2xx, malformed body, unusable payload)
    /// is logged and collapses to the empty state; no error reaches the
    /// rendered output. Calling this again after the state has left
    /// `Loading` is a no-op.
    pub async fn fetch_once(&mut self) -> &DisplayState {
        if !self.state.is_loading() {
            return &self.state;
        }

        let outcome = match self.provider.fetch().await {
            Ok(payload) => match WeatherSnapshot::from_payload(&payload, Utc::now()) {
                Ok(snapshot) => Some(snapshot),
                Err(err) => {
                    tracing::error!(error = %err, "weather payload could not be normalized");
                    None
                }
            },
            Err(err) => {
                tracing::error!(error = %err, "weather fetch failed");
                None
            }
        };

        self.state = std::mem::take(&mut self.state).resolve(outcome);
        &self.state
    }
}
