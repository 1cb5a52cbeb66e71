use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ErrorMessage, HttpError};

/// Form submission decoded into `T`, whatever encoding the client used:
/// `application/x-www-form-urlencoded`, `multipart/form-data` (browser
/// `FormData`) or a flat JSON object. Every value reaches `T` as a string;
/// a JSON `null` counts as an absent field. A request with no body type is
/// treated as an empty form.
#[derive(Debug, Clone)]
pub struct FormFields<T>(pub T);

fn bad_body() -> HttpError {
    HttpError::bad_request(ErrorMessage::InvalidRequestBody.to_string())
}

fn json_scalar(value: Value) -> Result<Option<String>, HttpError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(bad_body()),
    }
}

async fn collect_fields<S>(req: Request, state: &S) -> Result<Map<String, Value>, HttpError>
where
    S: Send + Sync,
{
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let mut fields = Map::new();

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|_| bad_body())?;

        while let Some(field) = multipart.next_field().await.map_err(|_| bad_body())? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            let value = field.text().await.map_err(|_| bad_body())?;
            fields.insert(name, Value::String(value));
        }
    } else if content_type.starts_with("application/json") {
        let bytes = Bytes::from_request(req, state).await.map_err(|_| bad_body())?;
        let object: Map<String, Value> = serde_json::from_slice(&bytes).map_err(|_| bad_body())?;

        for (name, value) in object {
            if let Some(value) = json_scalar(value)? {
                fields.insert(name, Value::String(value));
            }
        }
    } else if content_type.starts_with("application/x-www-form-urlencoded") || content_type.is_empty() {
        let bytes = Bytes::from_request(req, state).await.map_err(|_| bad_body())?;
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_bytes(&bytes).map_err(|_| bad_body())?;

        for (name, value) in pairs {
            fields.insert(name, Value::String(value));
        }
    } else {
        return Err(bad_body());
    }

    Ok(fields)
}

#[async_trait]
impl<S, T> FromRequest<S> for FormFields<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = collect_fields(req, state).await?;
        let value = serde_json::from_value(Value::Object(fields)).map_err(|_| bad_body())?;
        Ok(FormFields(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::userdtos::UpdateSettingsForm;
    use axum::{body::Body, http::StatusCode};

    async fn extract(content_type: Option<&str>, body: &str) -> Result<UpdateSettingsForm, HttpError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body.to_string())).unwrap();
        FormFields::<UpdateSettingsForm>::from_request(req, &())
            .await
            .map(|FormFields(form)| form)
    }

    #[tokio::test]
    async fn test_urlencoded() {
        let form = extract(
            Some("application/x-www-form-urlencoded"),
            "setting_type=appearance&theme=dark",
        )
        .await
        .unwrap();
        assert_eq!(form.setting_type.as_deref(), Some("appearance"));
        assert_eq!(form.theme.as_deref(), Some("dark"));
        assert_eq!(form.task_reminders, None);
    }

    #[tokio::test]
    async fn test_multipart() {
        let body = "--XYZ\r\n\
            Content-Disposition: form-data; name=\"setting_type\"\r\n\r\n\
            notifications\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"task_reminders\"\r\n\r\n\
            1\r\n\
            --XYZ--\r\n";
        let form = extract(Some("multipart/form-data; boundary=XYZ"), body)
            .await
            .unwrap();
        assert_eq!(form.setting_type.as_deref(), Some("notifications"));
        assert_eq!(form.task_reminders.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_json_scalars_become_strings() {
        let form = extract(
            Some("application/json"),
            r#"{"setting_type":"notifications","task_reminders":1,"theme":null}"#,
        )
        .await
        .unwrap();
        assert_eq!(form.task_reminders.as_deref(), Some("1"));
        assert_eq!(form.theme, None);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_an_empty_form() {
        let form = extract(None, "").await.unwrap();
        assert_eq!(form.setting_type, None);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let err = extract(Some("application/json"), "{not json").await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid request body");
    }
}
