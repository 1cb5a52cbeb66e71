// service/settings_service.rs
use std::sync::Arc;

use crate::{
    db::DatabaseExt,
    dtos::userdtos::{SettingsUpdate, UpdateSettingsForm, UserSettingsDto},
    service::error::ServiceError,
};

#[derive(Clone)]
pub struct SettingsService {
    db_client: Arc<dyn DatabaseExt>,
}

impl SettingsService {
    pub fn new(db_client: Arc<dyn DatabaseExt>) -> Self {
        Self { db_client }
    }

    pub async fn get_settings(&self, user_id: i64) -> Result<UserSettingsDto, ServiceError> {
        let settings = self
            .db_client
            .get_user_settings(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound(user_id))?;

        Ok(UserSettingsDto::from(settings))
    }

    /// Applies one settings mutation. The form is fully validated before any
    /// statement runs.
    pub async fn update_settings(
        &self,
        user_id: i64,
        form: UpdateSettingsForm,
    ) -> Result<SettingsUpdate, ServiceError> {
        let update = SettingsUpdate::try_from(form)?;

        let rows = match update {
            SettingsUpdate::TaskReminders(enabled) => {
                self.db_client.update_task_reminders(user_id, enabled).await?
            }
            SettingsUpdate::Theme(theme) => {
                self.db_client.update_theme_preference(user_id, theme).await?
            }
        };

        if rows == 0 {
            return Err(ServiceError::UserNotFound(user_id));
        }

        tracing::info!(user_id, ?update, "user settings updated");

        Ok(update)
    }
}
