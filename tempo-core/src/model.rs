use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One daily entry of the provider's `forecast` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub weekday: String,
    pub date: String,
    pub max: f64,
    pub min: f64,
    pub description: String,
    pub condition: String,
}

/// The `results` object of an HG Brasil weather response, restricted to
/// the fields the display consumes. Index 0 of `forecast` is today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderPayload {
    pub city: String,
    pub temp: f64,
    pub condition_slug: String,
    pub rain: f64,
    pub wind_speedy: String,
    pub sunrise: String,
    pub sunset: String,
    pub date: String,
    #[serde(default)]
    pub forecast: Vec<ForecastEntry>,
}

/// Today's temperature range, taken from `forecast[0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRange {
    pub max: f64,
    pub min: f64,
}

/// A normalized upcoming-day forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    pub weekday: String,
    pub date: String,
    pub max: f64,
    pub min: f64,
    pub description: String,
    pub condition_slug: String,
}

/// The normalized result consumed by the renderer.
///
/// Built exactly once per successful fetch and replaced wholesale by the
/// next one; never mutated in place. Time and date strings come
/// preformatted from the provider and are treated as opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub current_temperature_c: f64,
    pub condition_slug: String,
    pub rain_chance_percent: f64,
    pub wind_description: String,
    pub sunrise: String,
    pub sunset: String,
    pub date: String,
    pub today: DayRange,
    /// At most three entries, from indices 1..=3 of the source forecast.
    pub upcoming: Vec<DayForecast>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The forecast array was empty, so today's max/min cannot be derived.
    /// The reference UI would render undefined values here; we refuse the
    /// payload instead.
    #[error("provider payload has no forecast entry for today")]
    MissingToday,
}

impl WeatherSnapshot {
    /// Normalize a raw provider payload.
    ///
    /// Today's range comes from `forecast[0]`; its absence is a hard
    /// failure. `upcoming` takes indices 1, 2 and 3 in order, and a
    /// shorter array simply yields fewer entries. The payload is
    /// borrowed and left untouched.
    pub fn from_payload(
        raw: &ProviderPayload,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self, NormalizeError> {
        let today = raw
            .forecast
            .first()
            .map(|entry| DayRange { max: entry.max, min: entry.min })
            .ok_or(NormalizeError::MissingToday)?;

        let upcoming = raw
            .forecast
            .iter()
            .skip(1)
            .take(3)
            .map(|entry| DayForecast {
                weekday: entry.weekday.clone(),
                date: entry.date.clone(),
                max: entry.max,
                min: entry.min,
                description: entry.description.clone(),
                condition_slug: entry.condition.clone(),
            })
            .collect();

        Ok(WeatherSnapshot {
            city: raw.city.clone(),
            current_temperature_c: raw.temp,
            condition_slug: raw.condition_slug.clone(),
            rain_chance_percent: raw.rain,
            wind_description: raw.wind_speedy.clone(),
            sunrise: raw.sunrise.clone(),
            sunset: raw.sunset.clone(),
            date: raw.date.clone(),
            today,
            upcoming,
            fetched_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(weekday: &str, date: &str, max: f64, min: f64) -> ForecastEntry {
        ForecastEntry {
            weekday: weekday.to_string(),
            date: date.to_string(),
            max,
            min,
            description: format!("forecast for {weekday}"),
            condition: "rain".to_string(),
        }
    }

    fn payload(forecast: Vec<ForecastEntry>) -> ProviderPayload {
        ProviderPayload {
            city: "Recife,PE".to_string(),
            temp: 28.0,
            condition_slug: "storm".to_string(),
            rain: 10.0,
            wind_speedy: "3.1 km/h".to_string(),
            sunrise: "05:13 am".to_string(),
            sunset: "05:23 pm".to_string(),
            date: "29/08".to_string(),
            forecast,
        }
    }

    #[test]
    fn missing_today_is_a_hard_failure() {
        let raw = payload(vec![]);
        let err = WeatherSnapshot::from_payload(&raw, Utc::now()).unwrap_err();
        assert_eq!(err, NormalizeError::MissingToday);
    }

    #[test]
    fn today_range_comes_from_first_entry() {
        let raw = payload(vec![entry("Sex", "29/08", 30.0, 22.0)]);
        let snapshot = WeatherSnapshot::from_payload(&raw, Utc::now()).unwrap();

        assert_eq!(snapshot.today, DayRange { max: 30.0, min: 22.0 });
        assert!(snapshot.upcoming.is_empty());
    }

    #[test]
    fn upcoming_takes_at_most_three_days_after_today() {
        let raw = payload(vec![
            entry("Sex", "29/08", 30.0, 22.0),
            entry("Sáb", "30/08", 29.0, 21.0),
            entry("Dom", "31/08", 28.0, 21.0),
            entry("Seg", "01/09", 27.0, 20.0),
            entry("Ter", "02/09", 26.0, 19.0),
        ]);
        let snapshot = WeatherSnapshot::from_payload(&raw, Utc::now()).unwrap();

        let weekdays: Vec<&str> =
            snapshot.upcoming.iter().map(|d| d.weekday.as_str()).collect();
        assert_eq!(weekdays, vec!["Sáb", "Dom", "Seg"]);
    }

    #[test]
    fn upcoming_length_tracks_forecast_length() {
        for len in 1..=6usize {
            let forecast: Vec<ForecastEntry> =
                (0..len).map(|i| entry("Dia", "01/01", 25.0, 18.0 + i as f64)).collect();
            let raw = payload(forecast);
            let snapshot = WeatherSnapshot::from_payload(&raw, Utc::now()).unwrap();

            assert_eq!(snapshot.upcoming.len(), (len - 1).min(3), "forecast length {len}");
        }
    }

    #[test]
    fn normalization_does_not_mutate_the_payload() {
        let raw = payload(vec![
            entry("Sex", "29/08", 30.0, 22.0),
            entry("Sáb", "30/08", 29.0, 21.0),
        ]);
        let before = raw.clone();

        let _ = WeatherSnapshot::from_payload(&raw, Utc::now()).unwrap();
        assert_eq!(raw, before);
    }

    #[test]
    fn snapshot_copies_current_conditions() {
        let raw = payload(vec![entry("Sex", "29/08", 30.0, 22.0)]);
        let now = Utc::now();
        let snapshot = WeatherSnapshot::from_payload(&raw, now).unwrap();

        assert_eq!(snapshot.city, "Recife,PE");
        assert_eq!(snapshot.current_temperature_c, 28.0);
        assert_eq!(snapshot.condition_slug, "storm");
        assert_eq!(snapshot.rain_chance_percent, 10.0);
        assert_eq!(snapshot.wind_description, "3.1 km/h");
        assert_eq!(snapshot.fetched_at, now);
    }
}
