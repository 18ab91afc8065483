//! Database repository for enrollments.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::enrollments::{EnrollmentCreateDBRequest, EnrollmentDBResponse, EnrollmentUpdateDBRequest},
};
use crate::keys::EnrollmentKey;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Enrollments<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Enrollments<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Enrollments<'c> {
    type CreateRequest = EnrollmentCreateDBRequest;
    type UpdateRequest = EnrollmentUpdateDBRequest;
    type Response = EnrollmentDBResponse;
    type Key = EnrollmentKey;

    #[instrument(skip(self, request), fields(student_id = request.student_id, course_id = %request.course_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let enrollment = sqlx::query_as::<_, EnrollmentDBResponse>(
            "INSERT INTO takes (student_id, course_id, sec_id, semester, year, grade)
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(request.student_id)
        .bind(&request.course_id)
        .bind(&request.sec_id)
        .bind(&request.semester)
        .bind(request.year)
        .bind(&request.grade)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(enrollment)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let enrollments = sqlx::query_as::<_, EnrollmentDBResponse>("SELECT * FROM takes")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(enrollments)
    }

    #[instrument(skip(self, request), fields(enrollment = %key), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let enrollment = sqlx::query_as::<_, EnrollmentDBResponse>(
            "UPDATE takes SET grade = $6
             WHERE student_id = $1 AND course_id = $2 AND sec_id = $3 AND semester = $4 AND year = $5
             RETURNING *",
        )
        .bind(key.student_id)
        .bind(&key.course_id)
        .bind(&key.sec_id)
        .bind(&key.semester)
        .bind(key.year)
        .bind(&request.grade)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(enrollment)
    }

    #[instrument(skip(self), fields(enrollment = %key), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM takes
             WHERE student_id = $1 AND course_id = $2 AND sec_id = $3 AND semester = $4 AND year = $5",
        )
        .bind(key.student_id)
        .bind(&key.course_id)
        .bind(&key.sec_id)
        .bind(&key.semester)
        .bind(key.year)
        .execute(&mut *self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::handlers::{Courses, Sections, Students};
    use crate::db::models::courses::CourseCreateDBRequest;
    use crate::db::models::sections::SectionCreateDBRequest;
    use crate::db::models::students::StudentCreateDBRequest;

    use sqlx::PgPool;

    async fn seed(pool: &PgPool) {
        let mut conn = pool.acquire().await.unwrap();

        Students::new(&mut conn)
            .create(&StudentCreateDBRequest {
                student_id: 42,
                first_name: "Ravi".to_string(),
                last_name: None,
                phone: None,
                date_of_birth: None,
                dept_name: None,
                hostel_id: None,
                room_number: None,
            })
            .await
            .expect("Failed to create student");

        Courses::new(&mut conn)
            .create(&CourseCreateDBRequest {
                course_id: "CS101".to_string(),
                course_name: "Intro to Computing".to_string(),
                duration: Some(14),
            })
            .await
            .expect("Failed to create course");

        Sections::new(&mut conn)
            .create(&SectionCreateDBRequest {
                course_id: "CS101".to_string(),
                sec_id: "1".to_string(),
                semester: "Fall".to_string(),
                year: 2024,
                building: None,
                room_no: None,
                time_slot_id: None,
                instructor_id: None,
            })
            .await
            .expect("Failed to create section");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn grade_update_by_decoded_key(pool: PgPool) {
        seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Enrollments::new(&mut conn);

        repo.create(&EnrollmentCreateDBRequest {
            student_id: 42,
            course_id: "CS101".to_string(),
            sec_id: "1".to_string(),
            semester: "Fall".to_string(),
            year: 2024,
            grade: None,
        })
        .await
        .expect("Failed to create enrollment");

        let key: EnrollmentKey = "42-CS101-1-Fall-2024".parse().unwrap();
        let updated = repo
            .update(&key, &EnrollmentUpdateDBRequest { grade: Some("A".to_string()) })
            .await
            .expect("Failed to update enrollment");
        assert_eq!(updated.grade.as_deref(), Some("A"));

        assert!(repo.delete(&key).await.unwrap());
        assert!(!repo.delete(&key).await.unwrap());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn enrollment_requires_existing_section(pool: PgPool) {
        seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Enrollments::new(&mut conn);

        let err = repo
            .create(&EnrollmentCreateDBRequest {
                student_id: 42,
                course_id: "CS101".to_string(),
                sec_id: "9".to_string(),
                semester: "Fall".to_string(),
                year: 2024,
                grade: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }
}
