use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::{
    dtos::userdtos::{SettingsUpdate, UpdateSettingsForm, UpdateSettingsResponse, UserSettingsResponse},
    error::{ErrorMessage, HttpError},
    handler::method_not_allowed,
    middleware::SessionContext,
    utils::form::FormFields,
    AppState,
};

pub fn users_handler() -> Router {
    Router::new()
        .route(
            "/settings",
            get(get_user_settings)
                .post(get_user_settings)
                .fallback(method_not_allowed),
        )
        .route(
            "/settings/update",
            post(update_settings).fallback(method_not_allowed),
        )
}

pub async fn get_user_settings(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionContext>,
) -> Result<impl IntoResponse, HttpError> {
    let user = app_state
        .settings_service
        .get_settings(session.user_id)
        .await
        .map_err(|e| e.into_http(ErrorMessage::GetSettingsFailed, app_state.env.is_production()))?;

    Ok(Json(UserSettingsResponse {
        success: true,
        user,
    }))
}

pub async fn update_settings(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionContext>,
    FormFields(form): FormFields<UpdateSettingsForm>,
) -> Result<impl IntoResponse, HttpError> {
    let update = app_state
        .settings_service
        .update_settings(session.user_id, form)
        .await
        .map_err(|e| e.into_http(ErrorMessage::UpdateSettingsFailed, app_state.env.is_production()))?;

    let response = match update {
        SettingsUpdate::TaskReminders(_) => UpdateSettingsResponse {
            success: true,
            message: "Notification settings updated successfully".to_string(),
            theme: None,
        },
        SettingsUpdate::Theme(theme) => UpdateSettingsResponse {
            success: true,
            message: "Appearance settings updated successfully".to_string(),
            theme: Some(theme),
        },
    };

    Ok(Json(response))
}
