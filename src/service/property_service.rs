// service/property_service.rs
use std::sync::Arc;

use crate::{
    db::DatabaseExt,
    dtos::propertydtos::{AddPropertyForm, NewProperty},
    middleware::SessionContext,
    service::error::ServiceError,
};

#[derive(Clone)]
pub struct PropertyService {
    db_client: Arc<dyn DatabaseExt>,
}

impl PropertyService {
    pub fn new(db_client: Arc<dyn DatabaseExt>) -> Self {
        Self { db_client }
    }

    /// Validates the submission and records it as a lead owned by the
    /// session's agent. Returns the new property id.
    pub async fn add_property(
        &self,
        session: &SessionContext,
        form: AddPropertyForm,
    ) -> Result<i64, ServiceError> {
        let property = NewProperty::try_from(form)?;

        let property_id = self
            .db_client
            .insert_property(session.user_id, &property)
            .await?;

        tracing::info!(property_id, agent_id = session.user_id, "property lead added");

        Ok(property_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::testing::InMemoryDb, dtos::propertydtos::tests::valid_form};

    fn session(user_id: i64) -> SessionContext {
        SessionContext { user_id, logged_in: true }
    }

    #[tokio::test]
    async fn test_add_property_stores_normalized_row() {
        let db = Arc::new(InMemoryDb::new());
        let service = PropertyService::new(db.clone());

        let id = service.add_property(&session(42), valid_form()).await.unwrap();

        let stored = db.property(id).unwrap();
        assert_eq!(stored.agent_id, 42);
        assert_eq!(stored.property.owner_name, "Juan Dela Cruz");
        assert_eq!(stored.property.bathrooms, None);
        assert_eq!(stored.property.lot_area, None);
    }

    #[tokio::test]
    async fn test_invalid_submission_writes_nothing() {
        let db = Arc::new(InMemoryDb::new());
        let service = PropertyService::new(db.clone());

        let form = AddPropertyForm {
            email: Some("juan.example.com".to_string()),
            ..valid_form()
        };
        let err = service.add_property(&session(42), form).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(ref m) if m == "Invalid email format"));
        assert_eq!(db.writes(), 0);
    }

    #[tokio::test]
    async fn test_connection_failure_is_reported() {
        let db = Arc::new(InMemoryDb::new());
        db.go_offline();
        let service = PropertyService::new(db.clone());

        let err = service.add_property(&session(42), valid_form()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Connection(_)));
    }
}
