pub mod properties;
pub mod users;

use crate::error::HttpError;

pub async fn method_not_allowed() -> HttpError {
    HttpError::method_not_allowed()
}
