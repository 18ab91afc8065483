//! Test utilities for integration testing.

use axum_test::TestServer;
use sqlx::PgPool;

/// Build a test server over the full router, backed by the given pool.
///
/// Pairs with `#[sqlx::test]`, which hands each test a migrated, isolated
/// database.
pub fn create_test_app(pool: PgPool) -> TestServer {
    let state = crate::AppState {
        db: pool,
        config: crate::Config::default(),
    };
    let router = crate::build_router(state).expect("Failed to build router");
    TestServer::new(router).expect("Failed to create test server")
}
