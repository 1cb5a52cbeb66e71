// models/usermodel.rs
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            _ => Err(()),
        }
    }
}

/// Settings projection of an active `users` row.
///
/// `theme_preference` and `task_reminders` are nullable so rows written
/// before those columns existed still load; defaults are applied when the
/// row is turned into a response.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct UserSettings {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub theme_preference: Option<String>,
    pub task_reminders: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl UserSettings {
    pub fn theme(&self) -> ThemePreference {
        self.theme_preference
            .as_deref()
            .and_then(|t| t.parse().ok())
            .unwrap_or_default()
    }

    pub fn task_reminders_enabled(&self) -> bool {
        self.task_reminders.unwrap_or(true)
    }
}
