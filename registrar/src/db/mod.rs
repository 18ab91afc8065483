//! Database layer: repositories over PostgreSQL.

pub mod errors;
pub mod handlers;
pub mod models;
