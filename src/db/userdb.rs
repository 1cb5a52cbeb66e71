// db/userdb.rs
use async_trait::async_trait;

use super::db::DBClient;

use crate::{
    models::usermodel::{ThemePreference, UserSettings},
    service::error::ServiceError,
};

#[async_trait]
pub trait UserExt {
    async fn get_user_settings(
        &self,
        user_id: i64,
    ) -> Result<Option<UserSettings>, ServiceError>;

    /// Returns the number of rows touched (0 when the user is gone).
    async fn update_task_reminders(
        &self,
        user_id: i64,
        enabled: bool,
    ) -> Result<u64, ServiceError>;

    async fn update_theme_preference(
        &self,
        user_id: i64,
        theme: ThemePreference,
    ) -> Result<u64, ServiceError>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_user_settings(
        &self,
        user_id: i64,
    ) -> Result<Option<UserSettings>, ServiceError> {
        let mut conn = self.acquire().await?;

        let settings = sqlx::query_as::<_, UserSettings>(
            r#"
            SELECT
                id,
                CONCAT(first_name, ' ', last_name) AS full_name,
                email,
                theme_preference,
                task_reminders,
                created_at
            FROM users
            WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(settings)
    }

    async fn update_task_reminders(
        &self,
        user_id: i64,
        enabled: bool,
    ) -> Result<u64, ServiceError> {
        let mut conn = self.acquire().await?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET task_reminders = $1,
                updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(enabled)
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update_theme_preference(
        &self,
        user_id: i64,
        theme: ThemePreference,
    ) -> Result<u64, ServiceError> {
        let mut conn = self.acquire().await?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET theme_preference = $1,
                updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(theme.as_str())
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected())
    }
}
