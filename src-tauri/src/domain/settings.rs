//! Application Settings
//!
//! `settings.json` is a flat object. Only `theme` is interpreted; every other
//! key is carried through untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values read as `System`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Theme::parse).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    /// Keys this version does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_theme_reads_as_system() {
        let settings: Settings = serde_json::from_value(json!({"theme": "sepia"})).unwrap();
        assert_eq!(settings.theme, Theme::System);
        let settings: Settings = serde_json::from_value(json!({"theme": 3})).unwrap();
        assert_eq!(settings.theme, Theme::System);
    }

    #[test]
    fn test_extra_keys_round_trip() {
        let raw = json!({"theme": "dark", "window_width": 640});
        let settings: Settings = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(serde_json::to_value(&settings).unwrap(), raw);
    }
}
