// db/db.rs
use std::time::Duration;

use sqlx::{
    pool::PoolConnection,
    postgres::{PgConnectOptions, PgPoolOptions},
    Pool, Postgres,
};

use crate::service::error::ServiceError;

#[derive(Clone)]
pub struct DBClient {
    pub pool: Pool<Postgres>,
}

impl std::fmt::Debug for DBClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DBClient")
            .field("pool", &"Pool<Postgres>")
            .field("size", &self.pool.size())
            .finish()
    }
}

impl DBClient {
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient { pool }
    }

    /// Builds a pool that opens no connection up front. A bad host or
    /// credential therefore fails the request that needed the database,
    /// not the process.
    pub fn connect_lazy(options: PgConnectOptions, max_connections: u32) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy_with(options);

        DBClient::new(pool)
    }

    /// One connection per request, returned to the pool when dropped.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, ServiceError> {
        self.pool.acquire().await.map_err(ServiceError::Connection)
    }
}
