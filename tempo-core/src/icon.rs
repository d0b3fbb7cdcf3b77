/// Icon categories understood by the display.
///
/// HG Brasil ships one image asset per category; the terminal rendition
/// substitutes a glyph per category, resolved by the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Storm,
    Snow,
    Hail,
    Rain,
    Fog,
    ClearDay,
    ClearNight,
    Cloud,
    CloudlyDay,
    CloudlyNight,
    NoneDay,
    NoneNight,
}

impl IconCategory {
    /// Map a raw `condition_slug` to a category.
    ///
    /// Exact-match lookup over the twelve known slugs, no case folding.
    /// Absent, empty, or unrecognized slugs fall back to `NoneDay`; this
    /// function never fails.
    pub fn from_slug(slug: Option<&str>) -> Self {
        match slug {
            Some("storm") => IconCategory::Storm,
            Some("snow") => IconCategory::Snow,
            Some("hail") => IconCategory::Hail,
            Some("rain") => IconCategory::Rain,
            Some("fog") => IconCategory::Fog,
            Some("clear_day") => IconCategory::ClearDay,
            Some("clear_night") => IconCategory::ClearNight,
            Some("cloud") => IconCategory::Cloud,
            Some("cloudly_day") => IconCategory::CloudlyDay,
            Some("cloudly_night") => IconCategory::CloudlyNight,
            Some("none_day") => IconCategory::NoneDay,
            Some("none_night") => IconCategory::NoneNight,
            _ => IconCategory::NoneDay,
        }
    }

    /// Asset key for this category, e.g. `"storm"` resolves `storm.png`.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Storm => "storm",
            IconCategory::Snow => "snow",
            IconCategory::Hail => "hail",
            IconCategory::Rain => "rain",
            IconCategory::Fog => "fog",
            IconCategory::ClearDay => "clear_day",
            IconCategory::ClearNight => "clear_night",
            IconCategory::Cloud => "cloud",
            IconCategory::CloudlyDay => "cloudly_day",
            IconCategory::CloudlyNight => "cloudly_night",
            IconCategory::NoneDay => "none_day",
            IconCategory::NoneNight => "none_night",
        }
    }

    /// Terminal stand-in for the image asset.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconCategory::Storm => "🌩",
            IconCategory::Snow => "❄",
            IconCategory::Hail => "🌨",
            IconCategory::Rain => "🌧",
            IconCategory::Fog => "🌫",
            IconCategory::ClearDay => "☀",
            IconCategory::ClearNight => "🌙",
            IconCategory::Cloud => "☁",
            IconCategory::CloudlyDay => "⛅",
            IconCategory::CloudlyNight => "☁🌙",
            IconCategory::NoneDay => "〇",
            IconCategory::NoneNight => "●",
        }
    }

    pub const fn all() -> &'static [IconCategory] {
        &[
            IconCategory::Storm,
            IconCategory::Snow,
            IconCategory::Hail,
            IconCategory::Rain,
            IconCategory::Fog,
            IconCategory::ClearDay,
            IconCategory::ClearNight,
            IconCategory::Cloud,
            IconCategory::CloudlyDay,
            IconCategory::CloudlyNight,
            IconCategory::NoneDay,
            IconCategory::NoneNight,
        ]
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
