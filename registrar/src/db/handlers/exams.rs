//! Database repository for exams.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::exams::{ExamCreateDBRequest, ExamDBResponse, ExamUpdateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Exams<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Exams<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Exams<'c> {
    type CreateRequest = ExamCreateDBRequest;
    type UpdateRequest = ExamUpdateDBRequest;
    type Response = ExamDBResponse;
    type Key = String;

    #[instrument(skip(self, request), fields(exam_code = %request.exam_code), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let exam = sqlx::query_as::<_, ExamDBResponse>(
            "INSERT INTO exam (exam_code, date, room_no) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&request.exam_code)
        .bind(request.date)
        .bind(&request.room_no)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(exam)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let exams = sqlx::query_as::<_, ExamDBResponse>("SELECT * FROM exam")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(exams)
    }

    #[instrument(skip(self, request), fields(exam_code = %key), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let exam = sqlx::query_as::<_, ExamDBResponse>(
            "UPDATE exam SET date = $2, room_no = $3 WHERE exam_code = $1 RETURNING *",
        )
        .bind(key)
        .bind(request.date)
        .bind(&request.room_no)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(exam)
    }

    #[instrument(skip(self), fields(exam_code = %key), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM exam WHERE exam_code = $1")
            .bind(key)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
