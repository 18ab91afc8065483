//! Database repository for exam registrations.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::exam_students::{ExamStudentCreateDBRequest, ExamStudentDBResponse, ExamStudentUpdateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct ExamStudents<'c> {
    db: &'c mut PgConnection,
}

impl<'c> ExamStudents<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for ExamStudents<'c> {
    type CreateRequest = ExamStudentCreateDBRequest;
    type UpdateRequest = ExamStudentUpdateDBRequest;
    type Response = ExamStudentDBResponse;
    type Key = (String, i32);

    #[instrument(skip(self, request), fields(exam_code = %request.exam_code, student_id = request.student_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let registration = sqlx::query_as::<_, ExamStudentDBResponse>(
            "INSERT INTO exam_student (exam_code, student_id, marks) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&request.exam_code)
        .bind(request.student_id)
        .bind(request.marks)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(registration)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let registrations = sqlx::query_as::<_, ExamStudentDBResponse>("SELECT * FROM exam_student")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(registrations)
    }

    #[instrument(skip(self, request), fields(exam_code = %key.0, student_id = key.1), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let registration = sqlx::query_as::<_, ExamStudentDBResponse>(
            "UPDATE exam_student SET marks = $3 WHERE exam_code = $1 AND student_id = $2 RETURNING *",
        )
        .bind(&key.0)
        .bind(key.1)
        .bind(request.marks)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(registration)
    }

    #[instrument(skip(self), fields(exam_code = %key.0, student_id = key.1), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM exam_student WHERE exam_code = $1 AND student_id = $2")
            .bind(&key.0)
            .bind(key.1)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
