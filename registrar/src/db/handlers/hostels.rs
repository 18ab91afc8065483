//! Database repository for hostels.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::hostels::{HostelCreateDBRequest, HostelDBResponse, HostelUpdateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Hostels<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Hostels<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Hostels<'c> {
    type CreateRequest = HostelCreateDBRequest;
    type UpdateRequest = HostelUpdateDBRequest;
    type Response = HostelDBResponse;
    type Key = i32;

    #[instrument(skip(self, request), fields(hostel_name = %request.hostel_name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let hostel = sqlx::query_as::<_, HostelDBResponse>(
            "INSERT INTO hostel (hostel_name, location, capacity) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&request.hostel_name)
        .bind(&request.location)
        .bind(request.capacity)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(hostel)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let hostels = sqlx::query_as::<_, HostelDBResponse>("SELECT * FROM hostel")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(hostels)
    }

    #[instrument(skip(self, request), fields(hostel_id = %key), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let hostel = sqlx::query_as::<_, HostelDBResponse>(
            "UPDATE hostel SET hostel_name = $2, location = $3, capacity = $4 WHERE hostel_id = $1 RETURNING *",
        )
        .bind(key)
        .bind(&request.hostel_name)
        .bind(&request.location)
        .bind(request.capacity)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(hostel)
    }

    #[instrument(skip(self), fields(hostel_id = %key), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM hostel WHERE hostel_id = $1")
            .bind(key)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
