//! Database repository for hostel rooms.
//!
//! Rooms have no single-column key; callers address them with a decoded
//! [`RoomKey`].

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::rooms::{RoomCreateDBRequest, RoomDBResponse, RoomUpdateDBRequest},
};
use crate::keys::RoomKey;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Rooms<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Rooms<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Rooms<'c> {
    type CreateRequest = RoomCreateDBRequest;
    type UpdateRequest = RoomUpdateDBRequest;
    type Response = RoomDBResponse;
    type Key = RoomKey;

    #[instrument(skip(self, request), fields(hostel_id = request.hostel_id, room_number = %request.room_number), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let room = sqlx::query_as::<_, RoomDBResponse>(
            "INSERT INTO hostel_room (hostel_id, room_number, room_type, floor_number)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(request.hostel_id)
        .bind(&request.room_number)
        .bind(&request.room_type)
        .bind(request.floor_number)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(room)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let rooms = sqlx::query_as::<_, RoomDBResponse>("SELECT * FROM hostel_room")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(rooms)
    }

    #[instrument(skip(self, request), fields(room = %key), err)]
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let room = sqlx::query_as::<_, RoomDBResponse>(
            "UPDATE hostel_room SET room_type = $3, floor_number = $4
             WHERE hostel_id = $1 AND room_number = $2 RETURNING *",
        )
        .bind(key.hostel_id)
        .bind(&key.room_number)
        .bind(&request.room_type)
        .bind(request.floor_number)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(room)
    }

    #[instrument(skip(self), fields(room = %key), err)]
    async fn delete(&mut self, key: &Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM hostel_room WHERE hostel_id = $1 AND room_number = $2")
            .bind(key.hostel_id)
            .bind(&key.room_number)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::handlers::Hostels;
    use crate::db::models::hostels::HostelCreateDBRequest;

    use sqlx::PgPool;

    async fn create_test_hostel(pool: &PgPool) -> i32 {
        let mut conn = pool.acquire().await.unwrap();
        let mut hostels = Hostels::new(&mut conn);
        hostels
            .create(&HostelCreateDBRequest {
                hostel_name: "North Hall".to_string(),
                location: Some("Campus Rd, Pune".to_string()),
                capacity: Some(200),
            })
            .await
            .expect("Failed to create hostel")
            .hostel_id
    }

    #[sqlx::test]
    #[test_log::test]
    async fn delete_by_decoded_key_removes_exactly_one_room(pool: PgPool) {
        let hostel_id = create_test_hostel(&pool).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Rooms::new(&mut conn);

        for number in ["12", "121"] {
            repo.create(&RoomCreateDBRequest {
                hostel_id,
                room_number: number.to_string(),
                room_type: Some("Double".to_string()),
                floor_number: Some(1),
            })
            .await
            .expect("Failed to create room");
        }

        let key: RoomKey = format!("{hostel_id}-12").parse().unwrap();
        assert!(repo.delete(&key).await.unwrap());

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].room_number, "121");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn update_changes_attributes_but_not_key(pool: PgPool) {
        let hostel_id = create_test_hostel(&pool).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Rooms::new(&mut conn);

        repo.create(&RoomCreateDBRequest {
            hostel_id,
            room_number: "7".to_string(),
            room_type: Some("Single".to_string()),
            floor_number: None,
        })
        .await
        .expect("Failed to create room");

        let key = RoomKey {
            hostel_id,
            room_number: "7".to_string(),
        };
        let request = RoomUpdateDBRequest {
            room_type: Some("Double".to_string()),
            floor_number: Some(2),
        };
        let updated = repo.update(&key, &request).await.expect("Failed to update room");
        assert_eq!(updated.hostel_id, hostel_id);
        assert_eq!(updated.room_number, "7");
        assert_eq!(updated.room_type.as_deref(), Some("Double"));

        // Applying the same update again leaves the row in the same state
        let again = repo.update(&key, &request).await.expect("Failed to re-apply update");
        assert_eq!(again.room_type, updated.room_type);
        assert_eq!(again.floor_number, updated.floor_number);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn room_in_unknown_hostel_is_a_foreign_key_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Rooms::new(&mut conn);

        let err = repo
            .create(&RoomCreateDBRequest {
                hostel_id: 9999,
                room_number: "1".to_string(),
                room_type: None,
                floor_number: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }
}
