//! Pure text rendering of the display state.
//!
//! The reference UI is a single phone screen; here each panel becomes a
//! block of lines. Rendering is a pure function of the state, so the
//! same state always produces the same lines.

use crate::{
    icon::IconCategory,
    model::{DayForecast, WeatherSnapshot},
    state::DisplayState,
};

/// Render a display state to output lines.
///
/// `Loading` shows a spinner stand-in and label, `Empty` renders nothing
/// beyond the bare frame, and `Loaded` renders the full panel set.
pub fn render(state: &DisplayState) -> Vec<String> {
    match state {
        DisplayState::Loading => vec!["◌  Carregando...".to_string()],
        DisplayState::Empty => Vec::new(),
        DisplayState::Loaded(snapshot) => render_loaded(snapshot),
    }
}

fn render_loaded(snapshot: &WeatherSnapshot) -> Vec<String> {
    let icon = IconCategory::from_slug(Some(&snapshot.condition_slug));

    let mut lines = vec![
        format!("⚲ {}  🔔", snapshot.city),
        String::new(),
        format!("{}  {}º", icon.glyph(), snapshot.current_temperature_c),
        "Precipitações".to_string(),
        format!("Max: {}º Min: {}º", snapshot.today.max, snapshot.today.min),
        String::new(),
        format!(
            "💧 {}%   🌡 {} °C   ☁ {}",
            snapshot.rain_chance_percent,
            snapshot.current_temperature_c,
            snapshot.wind_description,
        ),
        String::new(),
        format!("Today  {}", snapshot.date),
        format!("Pôr do sol: {}", snapshot.sunset),
        format!("Nascer do sol: {}", snapshot.sunrise),
        String::new(),
        "Previsão para os próximos dias 📅".to_string(),
    ];

    for day in &snapshot.upcoming {
        lines.extend(render_day(day));
    }

    lines
}

fn render_day(day: &DayForecast) -> [String; 2] {
    let icon = IconCategory::from_slug(Some(&day.condition_slug));

    [
        format!("{}  {} - {}", icon.glyph(), day.weekday, day.date),
        format!("   Max: {}º Min: {}º | {}", day.max, day.min, day.description),
    ]
}
