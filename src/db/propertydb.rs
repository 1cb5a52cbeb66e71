use async_trait::async_trait;

use crate::{
    db::db::DBClient,
    dtos::propertydtos::NewProperty,
    service::error::ServiceError,
};

#[async_trait]
pub trait PropertyExt {
    /// Inserts one lead owned by `agent_id` and returns its generated id.
    async fn insert_property(
        &self,
        agent_id: i64,
        property: &NewProperty,
    ) -> Result<i64, ServiceError>;
}

#[async_trait]
impl PropertyExt for DBClient {
    async fn insert_property(
        &self,
        agent_id: i64,
        property: &NewProperty,
    ) -> Result<i64, ServiceError> {
        let mut conn = self.acquire().await?;

        let property_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO properties (
                agent_id, description, barangay, street, city, province, price,
                property_type, class, bedrooms, bathrooms, floor_area, lot_area,
                owner_name, contact_number, email, status
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7,
                $8, $9, $10, $11, $12, $13,
                $14, $15, $16, $17
            )
            RETURNING id
            "#,
        )
        .bind(agent_id)
        .bind(&property.description)
        .bind(&property.barangay)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.price)
        .bind(&property.property_type)
        .bind(&property.class)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(&property.floor_area)
        .bind(&property.lot_area)
        .bind(&property.owner_name)
        .bind(&property.contact_number)
        .bind(&property.email)
        .bind(&property.status)
        .fetch_one(&mut *conn)
        .await?;

        Ok(property_id)
    }
}
