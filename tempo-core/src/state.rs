use crate::model::WeatherSnapshot;

/// The three mutually exclusive render states of the display.
///
/// Modeled as a tagged union so that "loading with stale data" and similar
/// combinations are unrepresentable. A fetch outcome moves `Loading` to
/// either `Loaded` or `Empty`; nothing returns to `Loading` without a new
/// fetch being started.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    #[default]
    Loading,
    /// Terminal no-data state: fetch failed or nothing to show.
    Empty,
    Loaded(WeatherSnapshot),
}

impl DisplayState {
    /// Apply a fetch outcome. A failure always lands in `Empty`, even if a
    /// snapshot was previously loaded; a success replaces any previous
    /// snapshot wholesale.
    pub fn resolve(self, outcome: Option<WeatherSnapshot>) -> Self {
        match outcome {
            Some(snapshot) => DisplayState::Loaded(snapshot),
            None => DisplayState::Empty,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            DisplayState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayRange, ProviderPayload, WeatherSnapshot};
    use chrono::Utc;

    fn sample_snapshot() -> WeatherSnapshot {
        let raw = ProviderPayload {
            city: "Recife,PE".to_string(),
            temp: 28.0,
            condition_slug: "clear_day".to_string(),
            rain: 0.0,
            wind_speedy: "2.0 km/h".to_string(),
            sunrise: "05:13 am".to_string(),
            sunset: "05:23 pm".to_string(),
            date: "29/08".to_string(),
            forecast: vec![crate::model::ForecastEntry {
                weekday: "Sex".to_string(),
                date: "29/08".to_string(),
                max: 30.0,
                min: 22.0,
                description: "Tempo limpo".to_string(),
                condition: "clear_day".to_string(),
            }],
        };
        WeatherSnapshot::from_payload(&raw, Utc::now()).unwrap()
    }

    #[test]
    fn starts_loading() {
        assert!(DisplayState::default().is_loading());
    }

    #[test]
    fn success_moves_to_loaded() {
        let state = DisplayState::Loading.resolve(Some(sample_snapshot()));
        let snapshot = state.snapshot().expect("state must be loaded");
        assert_eq!(snapshot.today, DayRange { max: 30.0, min: 22.0 });
    }

    #[test]
    fn failure_moves_to_empty() {
        let state = DisplayState::Loading.resolve(None);
        assert_eq!(state, DisplayState::Empty);
    }

    #[test]
    fn failure_discards_a_previously_loaded_snapshot() {
        let loaded = DisplayState::Loaded(sample_snapshot());
        let state = loaded.resolve(None);

        assert_eq!(state, DisplayState::Empty);
        assert!(state.snapshot().is_none());
    }
}
