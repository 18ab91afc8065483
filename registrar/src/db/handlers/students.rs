//! Database repository for students.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::students::{StudentCreateDBRequest, StudentDBResponse, StudentUpdateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Students<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Students<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Students<'c> {
    type CreateRequest = StudentCreateDBRequest;
    type UpdateRequest = StudentUpdateDBRequest;
    type Response = StudentDBResponse;
    type Key = i32;

    #[instrument(skip(self, request), fields(student_id = request.student_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let student = sqlx::query_as::<_, StudentDBResponse>(
            "INSERT INTO student
               (student_id, first_name, last_name, phone, date_of_birth, dept_name, hostel_id, room_number)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(request.student_id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.phone)
        .bind(request.date_of_birth)
        .bind(&request.dept_name)
        .bind(request.hostel_id)
        .bind(&request.room_number)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let students = sqlx::query_as::<_, StudentDBResponse>("SELECT * FROM student")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(students)
    }

    #[instrument(skip(self, request), fields(student_id = key), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let student = sqlx::query_as::<_, StudentDBResponse>(
            "UPDATE student SET
               first_name = $2, last_name = $3, phone = $4, date_of_birth = $5,
               dept_name = $6, hostel_id = $7, room_number = $8
             WHERE student_id = $1 RETURNING *",
        )
        .bind(key)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.phone)
        .bind(request.date_of_birth)
        .bind(&request.dept_name)
        .bind(request.hostel_id)
        .bind(&request.room_number)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(student)
    }

    #[instrument(skip(self), fields(student_id = key), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM student WHERE student_id = $1")
            .bind(key)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    fn sample(student_id: i32) -> StudentCreateDBRequest {
        StudentCreateDBRequest {
            student_id,
            first_name: "Asha".to_string(),
            last_name: Some("Patil".to_string()),
            phone: None,
            date_of_birth: None,
            dept_name: None,
            hostel_id: None,
            room_number: None,
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unknown_department_is_a_foreign_key_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Students::new(&mut conn);

        let mut request = sample(1001);
        request.dept_name = Some("Alchemy".to_string());
        let err = repo.create(&request).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unhoused_student_round_trips_with_null_room(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Students::new(&mut conn);

        repo.create(&sample(1002)).await.expect("Failed to create student");
        let all = repo.list().await.unwrap();
        let found = all.iter().find(|s| s.student_id == 1002).unwrap();
        assert_eq!(found.first_name, "Asha");
        assert!(found.hostel_id.is_none());
        assert!(found.room_number.is_none());
    }
}
