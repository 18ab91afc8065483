//! Database repository for time slots.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::time_slots::{TimeSlotCreateDBRequest, TimeSlotDBResponse, TimeSlotUpdateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct TimeSlots<'c> {
    db: &'c mut PgConnection,
}

impl<'c> TimeSlots<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for TimeSlots<'c> {
    type CreateRequest = TimeSlotCreateDBRequest;
    type UpdateRequest = TimeSlotUpdateDBRequest;
    type Response = TimeSlotDBResponse;
    type Key = String;

    #[instrument(skip(self, request), fields(time_slot_id = %request.time_slot_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let slot = sqlx::query_as::<_, TimeSlotDBResponse>(
            "INSERT INTO time_slot (time_slot_id, day, start_time, end_time)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&request.time_slot_id)
        .bind(&request.day)
        .bind(request.start_time)
        .bind(request.end_time)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(slot)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let slots = sqlx::query_as::<_, TimeSlotDBResponse>("SELECT * FROM time_slot")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(slots)
    }

    #[instrument(skip(self, request), fields(time_slot_id = %key), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let slot = sqlx::query_as::<_, TimeSlotDBResponse>(
            "UPDATE time_slot SET day = $2, start_time = $3, end_time = $4
             WHERE time_slot_id = $1 RETURNING *",
        )
        .bind(key)
        .bind(&request.day)
        .bind(request.start_time)
        .bind(request.end_time)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(slot)
    }

    #[instrument(skip(self), fields(time_slot_id = %key), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM time_slot WHERE time_slot_id = $1")
            .bind(key)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
