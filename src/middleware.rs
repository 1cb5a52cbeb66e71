use std::sync::Arc;

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::IntoResponse,
    Extension,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{error::HttpError, utils::token, AppState};

pub const SESSION_COOKIE: &str = "session";

/// Authenticated caller of the current request. Inserted by [`auth`] and
/// passed explicitly to every handler.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SessionContext {
    pub user_id: i64,
    pub logged_in: bool,
}

fn session_token(cookie_jar: &CookieJar, req: &Request) -> Option<String> {
    cookie_jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
                .map(str::to_owned)
        })
}

/// Rejects the request with the "Not authenticated" envelope unless it
/// carries a valid session whose `logged_in` flag is set.
pub async fn auth(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = session_token(&cookie_jar, &req).ok_or_else(HttpError::not_authenticated)?;

    let claims = token::decode_token(token, app_state.env.jwt_secret.as_bytes())
        .map_err(|_| HttpError::not_authenticated())?;

    if !claims.logged_in {
        return Err(HttpError::not_authenticated());
    }

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| HttpError::not_authenticated())?;

    req.extensions_mut().insert(SessionContext {
        user_id,
        logged_in: true,
    });

    Ok(next.run(req).await)
}
