//! Database repository for courses.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::courses::{CourseCreateDBRequest, CourseDBResponse, CourseUpdateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Courses<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Courses<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Courses<'c> {
    type CreateRequest = CourseCreateDBRequest;
    type UpdateRequest = CourseUpdateDBRequest;
    type Response = CourseDBResponse;
    type Key = String;

    #[instrument(skip(self, request), fields(course_id = %request.course_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let course = sqlx::query_as::<_, CourseDBResponse>(
            "INSERT INTO course (course_id, course_name, duration) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&request.course_id)
        .bind(&request.course_name)
        .bind(request.duration)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let courses = sqlx::query_as::<_, CourseDBResponse>("SELECT * FROM course")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(courses)
    }

    #[instrument(skip(self, request), fields(course_id = %key), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let course = sqlx::query_as::<_, CourseDBResponse>(
            "UPDATE course SET course_name = $2, duration = $3 WHERE course_id = $1 RETURNING *",
        )
        .bind(key)
        .bind(&request.course_name)
        .bind(request.duration)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(course)
    }

    #[instrument(skip(self), fields(course_id = %key), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM course WHERE course_id = $1")
            .bind(key)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
