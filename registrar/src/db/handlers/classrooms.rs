//! Database repository for classrooms.
//!
//! Classrooms are keyed by `(building, room_no)`. The API carries both parts
//! as separate path segments, so the key here is a plain pair rather than a
//! decoded synthetic id.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::classrooms::{ClassroomCreateDBRequest, ClassroomDBResponse, ClassroomUpdateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Classrooms<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Classrooms<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Classrooms<'c> {
    type CreateRequest = ClassroomCreateDBRequest;
    type UpdateRequest = ClassroomUpdateDBRequest;
    type Response = ClassroomDBResponse;
    type Key = (String, String);

    #[instrument(skip(self, request), fields(building = %request.building, room_no = %request.room_no), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let classroom = sqlx::query_as::<_, ClassroomDBResponse>(
            "INSERT INTO classroom (building, room_no, capacity) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&request.building)
        .bind(&request.room_no)
        .bind(request.capacity)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(classroom)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let classrooms = sqlx::query_as::<_, ClassroomDBResponse>("SELECT * FROM classroom")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(classrooms)
    }

    #[instrument(skip(self, request), fields(building = %key.0, room_no = %key.1), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let classroom = sqlx::query_as::<_, ClassroomDBResponse>(
            "UPDATE classroom SET capacity = $3 WHERE building = $1 AND room_no = $2 RETURNING *",
        )
        .bind(&key.0)
        .bind(&key.1)
        .bind(request.capacity)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(classroom)
    }

    #[instrument(skip(self), fields(building = %key.0, room_no = %key.1), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM classroom WHERE building = $1 AND room_no = $2")
            .bind(&key.0)
            .bind(&key.1)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn same_room_number_in_different_buildings_coexists(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Classrooms::new(&mut conn);

        for building in ["Taylor", "Watson"] {
            repo.create(&ClassroomCreateDBRequest {
                building: building.to_string(),
                room_no: "101".to_string(),
                capacity: Some(40),
            })
            .await
            .expect("Failed to create classroom");
        }

        assert_eq!(repo.list().await.unwrap().len(), 2);

        let key = ("Taylor".to_string(), "101".to_string());
        assert!(repo.delete(&key).await.unwrap());
        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].building, "Watson");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn duplicate_pair_is_a_unique_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Classrooms::new(&mut conn);

        let request = ClassroomCreateDBRequest {
            building: "Painter".to_string(),
            room_no: "514".to_string(),
            capacity: None,
        };
        repo.create(&request).await.expect("Failed to create classroom");
        let err = repo.create(&request).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
