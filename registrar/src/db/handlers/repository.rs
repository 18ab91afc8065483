//! Base repository trait for database operations.

use crate::db::errors::Result;

/// Base repository trait providing the CRUD contract every entity service
/// shares.
///
/// `list` returns the full row set in storage order: the admin tool has no
/// pagination or filtering contract. Keyed mutations report not-found
/// uniformly: `update` fails with [`crate::db::errors::DbError::NotFound`]
/// when no row matches, `delete` returns `false`.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The request type for updating entities
    type UpdateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for keyed mutations (natural key or decoded
    /// composite key)
    type Key: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// List all entities
    async fn list(&mut self) -> Result<Vec<Self::Response>>;

    /// Update an entity by key. Key columns are immutable; only non-key
    /// fields are applied.
    async fn update(&mut self, key: &Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response>;

    /// Delete an entity by key. Returns whether a row was deleted.
    async fn delete(&mut self, key: &Self::Key) -> Result<bool>;
}
