// Sheet settings (TOML)

use serde::Deserialize;

/// Check-in sheet settings. Every field has a default so a partial file
/// works; unknown keys are rejected to catch typos.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    pub title: String,
    /// Printed next to the title. Defaults to today.
    pub date: Option<String>,
    pub subtitle: String,
    /// Blank lines appended for walk-in attendees.
    pub walk_in_slots: u32,
    /// Show the reading next to the name when it differs.
    pub show_reading: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            title: "参加者名簿".to_string(),
            date: None,
            subtitle: "受付用リスト (50音順)".to_string(),
            walk_in_slots: 10,
            show_reading: true,
        }
    }
}

impl SheetConfig {
    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    pub fn date_line(&self) -> String {
        match &self.date {
            Some(date) => date.clone(),
            None => chrono::Local::now().format("%Y年%-m月%-d日").to_string(),
        }
    }
}
