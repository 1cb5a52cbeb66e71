use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::ErrorMessage,
    models::usermodel::{ThemePreference, UserSettings},
    service::error::ServiceError,
};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateSettingsForm {
    pub setting_type: Option<String>,
    pub task_reminders: Option<String>,
    pub theme: Option<String>,
}

/// One settings mutation; each variant touches a disjoint column group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsUpdate {
    TaskReminders(bool),
    Theme(ThemePreference),
}

impl TryFrom<UpdateSettingsForm> for SettingsUpdate {
    type Error = ServiceError;

    fn try_from(form: UpdateSettingsForm) -> Result<Self, Self::Error> {
        match form.setting_type.as_deref() {
            // Checkbox convention: the field being sent at all means "on".
            Some("notifications") => Ok(SettingsUpdate::TaskReminders(form.task_reminders.is_some())),
            Some("appearance") => {
                let theme = form.theme.as_deref().unwrap_or("light");
                theme
                    .parse::<ThemePreference>()
                    .map(SettingsUpdate::Theme)
                    .map_err(|_| ServiceError::validation(ErrorMessage::InvalidTheme.to_string()))
            }
            _ => Err(ServiceError::validation(ErrorMessage::InvalidSettingType.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettingsDto {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub theme_preference: ThemePreference,
    pub task_reminders: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<UserSettings> for UserSettingsDto {
    fn from(row: UserSettings) -> Self {
        UserSettingsDto {
            theme_preference: row.theme(),
            task_reminders: row.task_reminders_enabled(),
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserSettingsResponse {
    pub success: bool,
    pub user: UserSettingsDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateSettingsResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreference>,
}
