//! Database repository for hostel-admin assignments.
//!
//! Assignments are a pure link table: create, list, delete. There is nothing
//! to update, so this repository does not implement the shared trait.

use crate::db::{
    errors::Result,
    models::hostel_admins::{HostelAdminCreateDBRequest, HostelAdminDBResponse},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct HostelAdmins<'c> {
    db: &'c mut PgConnection,
}

impl<'c> HostelAdmins<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(instructor_id = %request.instructor_id, hostel_id = request.hostel_id), err)]
    pub async fn create(&mut self, request: &HostelAdminCreateDBRequest) -> Result<HostelAdminDBResponse> {
        let assignment = sqlx::query_as::<_, HostelAdminDBResponse>(
            "INSERT INTO hostel_admin (instructor_id, hostel_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(&request.instructor_id)
        .bind(request.hostel_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(assignment)
    }

    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<HostelAdminDBResponse>> {
        let assignments = sqlx::query_as::<_, HostelAdminDBResponse>("SELECT * FROM hostel_admin")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(assignments)
    }

    #[instrument(skip(self), fields(instructor_id = %instructor_id, hostel_id = hostel_id), err)]
    pub async fn delete(&mut self, instructor_id: &str, hostel_id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM hostel_admin WHERE instructor_id = $1 AND hostel_id = $2")
            .bind(instructor_id)
            .bind(hostel_id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
