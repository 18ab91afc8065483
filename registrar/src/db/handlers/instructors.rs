//! Database repository for instructors.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::instructors::{InstructorCreateDBRequest, InstructorDBResponse, InstructorUpdateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Instructors<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Instructors<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Instructors<'c> {
    type CreateRequest = InstructorCreateDBRequest;
    type UpdateRequest = InstructorUpdateDBRequest;
    type Response = InstructorDBResponse;
    type Key = String;

    #[instrument(skip(self, request), fields(instructor_id = %request.id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let instructor = sqlx::query_as::<_, InstructorDBResponse>(
            "INSERT INTO instructor (id, name, dept_name, salary) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&request.id)
        .bind(&request.name)
        .bind(&request.dept_name)
        .bind(request.salary)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(instructor)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let instructors = sqlx::query_as::<_, InstructorDBResponse>("SELECT * FROM instructor")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(instructors)
    }

    #[instrument(skip(self, request), fields(instructor_id = %key), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let instructor = sqlx::query_as::<_, InstructorDBResponse>(
            "UPDATE instructor SET name = $2, dept_name = $3, salary = $4 WHERE id = $1 RETURNING *",
        )
        .bind(key)
        .bind(&request.name)
        .bind(&request.dept_name)
        .bind(request.salary)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(instructor)
    }

    #[instrument(skip(self), fields(instructor_id = %key), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM instructor WHERE id = $1")
            .bind(key)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
