//! Database repository for course sections.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::sections::{SectionCreateDBRequest, SectionDBResponse, SectionUpdateDBRequest},
};
use crate::keys::SectionKey;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Sections<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Sections<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Sections<'c> {
    type CreateRequest = SectionCreateDBRequest;
    type UpdateRequest = SectionUpdateDBRequest;
    type Response = SectionDBResponse;
    type Key = SectionKey;

    #[instrument(skip(self, request), fields(course_id = %request.course_id, sec_id = %request.sec_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let section = sqlx::query_as::<_, SectionDBResponse>(
            "INSERT INTO section
               (course_id, sec_id, semester, year, building, room_no, time_slot_id, instructor_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&request.course_id)
        .bind(&request.sec_id)
        .bind(&request.semester)
        .bind(request.year)
        .bind(&request.building)
        .bind(&request.room_no)
        .bind(&request.time_slot_id)
        .bind(&request.instructor_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(section)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let sections = sqlx::query_as::<_, SectionDBResponse>("SELECT * FROM section")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(sections)
    }

    #[instrument(skip(self, request), fields(section = %key), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let section = sqlx::query_as::<_, SectionDBResponse>(
            "UPDATE section SET building = $5, room_no = $6, time_slot_id = $7, instructor_id = $8
             WHERE course_id = $1 AND sec_id = $2 AND semester = $3 AND year = $4 RETURNING *",
        )
        .bind(&key.course_id)
        .bind(&key.sec_id)
        .bind(&key.semester)
        .bind(key.year)
        .bind(&request.building)
        .bind(&request.room_no)
        .bind(&request.time_slot_id)
        .bind(&request.instructor_id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(section)
    }

    #[instrument(skip(self), fields(section = %key), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM section WHERE course_id = $1 AND sec_id = $2 AND semester = $3 AND year = $4",
        )
        .bind(&key.course_id)
        .bind(&key.sec_id)
        .bind(&key.semester)
        .bind(key.year)
        .execute(&mut *self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
