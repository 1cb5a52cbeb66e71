use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};

use crate::{
    dtos::propertydtos::{AddPropertyForm, AddPropertyResponse},
    error::{ErrorMessage, HttpError},
    handler::method_not_allowed,
    middleware::SessionContext,
    utils::form::FormFields,
    AppState,
};

pub fn property_handler() -> Router {
    Router::new().route(
        "/properties",
        post(add_property).fallback(method_not_allowed),
    )
}

// Agent submits a new property lead
pub async fn add_property(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionContext>,
    FormFields(form): FormFields<AddPropertyForm>,
) -> Result<impl IntoResponse, HttpError> {
    let property_id = app_state
        .property_service
        .add_property(&session, form)
        .await
        .map_err(|e| e.into_http(ErrorMessage::AddPropertyFailed, app_state.env.is_production()))?;

    Ok((
        StatusCode::CREATED,
        Json(AddPropertyResponse {
            success: true,
            message: "Property added successfully!".to_string(),
            property_id,
        }),
    ))
}
