//! Core library for the `tempo` weather display.
//!
//! This crate defines:
//! - Configuration handling for the HG Brasil weather API
//! - The condition-to-icon mapping and payload normalization pipeline
//! - The display-state machine and its pure text renderer
//! - The one-shot fetch session driving it all
//!
//! It is used by `tempo-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod icon;
pub mod model;
pub mod provider;
pub mod render;
pub mod session;
pub mod state;

pub use config::Config;
pub use icon::IconCategory;
pub use model::{DayForecast, DayRange, ForecastEntry, NormalizeError, ProviderPayload, WeatherSnapshot};
pub use provider::{FetchError, WeatherProvider, provider_from_config};
pub use render::render;
pub use session::Session;
pub use state::DisplayState;
