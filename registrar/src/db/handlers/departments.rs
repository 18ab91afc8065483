//! Database repository for departments.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::departments::{DepartmentCreateDBRequest, DepartmentDBResponse, DepartmentUpdateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Departments<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Departments<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Departments<'c> {
    type CreateRequest = DepartmentCreateDBRequest;
    type UpdateRequest = DepartmentUpdateDBRequest;
    type Response = DepartmentDBResponse;
    type Key = String;

    #[instrument(skip(self, request), fields(dept_name = %request.dept_name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let department = sqlx::query_as::<_, DepartmentDBResponse>(
            "INSERT INTO department (dept_name, building, budget) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&request.dept_name)
        .bind(&request.building)
        .bind(request.budget)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(department)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let departments = sqlx::query_as::<_, DepartmentDBResponse>("SELECT * FROM department")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(departments)
    }

    #[instrument(skip(self, request), fields(dept_name = %key), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let department = sqlx::query_as::<_, DepartmentDBResponse>(
            "UPDATE department SET building = $2, budget = $3 WHERE dept_name = $1 RETURNING *",
        )
        .bind(key)
        .bind(&request.building)
        .bind(request.budget)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(department)
    }

    #[instrument(skip(self), fields(dept_name = %key), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM department WHERE dept_name = $1")
            .bind(key)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn create_then_list_round_trips(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Departments::new(&mut conn);

        let created = repo
            .create(&DepartmentCreateDBRequest {
                dept_name: "Physics".to_string(),
                building: Some("Watson".to_string()),
                budget: Some(Decimal::new(90_000_00, 2)),
            })
            .await
            .expect("Failed to create department");
        assert_eq!(created.dept_name, "Physics");

        let all = repo.list().await.expect("Failed to list departments");
        assert!(all.iter().any(|d| d.dept_name == "Physics" && d.building.as_deref() == Some("Watson")));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn duplicate_name_is_a_unique_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Departments::new(&mut conn);

        let request = DepartmentCreateDBRequest {
            dept_name: "History".to_string(),
            building: None,
            budget: None,
        };
        repo.create(&request).await.expect("Failed to create department");

        let err = repo.create(&request).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn update_missing_row_reports_not_found(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Departments::new(&mut conn);

        let err = repo
            .update(
                &"Absent".to_string(),
                &DepartmentUpdateDBRequest {
                    building: None,
                    budget: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn delete_is_final_and_repeat_reports_nothing_deleted(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Departments::new(&mut conn);

        repo.create(&DepartmentCreateDBRequest {
            dept_name: "Music".to_string(),
            building: None,
            budget: None,
        })
        .await
        .expect("Failed to create department");

        assert!(repo.delete(&"Music".to_string()).await.unwrap());
        assert!(repo.list().await.unwrap().iter().all(|d| d.dept_name != "Music"));
        assert!(!repo.delete(&"Music".to_string()).await.unwrap());
    }
}
