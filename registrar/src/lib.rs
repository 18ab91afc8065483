//! # registrar: University Administrative Records Service
//!
//! `registrar` is a small administrative records manager for a university: a
//! RESTful CRUD API over thirteen entity types (departments, hostels and
//! their rooms, instructors, hostel-admin assignments, students, courses,
//! sections, classrooms, time slots, exams, exam registrations, and
//! enrollments) backed by PostgreSQL, with an embedded single-page admin UI
//! and an aggregate stats endpoint for its dashboard.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and uses PostgreSQL (via `sqlx`) for all persistence.
//! Requests flow through three layers:
//!
//! - The **API layer** ([`api`]) exposes the management routes under `/api`.
//!   Handlers deserialize request models, decode synthetic composite ids at
//!   the boundary, and map storage rows back to the public field names.
//! - The **key codec** ([`keys`]) is the single place where composite ids
//!   (`room_id`, `section_id`, `enrollment_id`) are encoded and decoded.
//! - The **database layer** ([`db`]) uses the repository pattern: one
//!   repository per entity wrapping a pooled connection, with a shared
//!   create/list/update/delete contract.
//!
//! The admin UI is embedded into the binary at compile time and served from
//! the router's fallback, so a single executable carries the whole tool.
//! Interactive API documentation is available at `/docs`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use registrar::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = registrar::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     registrar::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await
//! }
//! ```
//!
//! ## Database Setup
//!
//! The application requires a PostgreSQL database and automatically runs
//! migrations on startup:
//!
//! ```no_run
//! # use sqlx::PgPool;
//! # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
//! registrar::migrator().run(&pool).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod keys;
mod openapi;
mod static_assets;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use crate::openapi::ApiDoc;
use axum::http::HeaderValue;
use axum::{
    routing::{delete, get},
    Router,
};
pub use config::Config;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, instrument, Level};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the registrar database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    if config.cors_allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));
    }

    let mut origins = Vec::new();
    for origin in &config.cors_allowed_origins {
        origins.push(origin.parse::<HeaderValue>()?);
    }

    Ok(CorsLayer::new().allow_origin(origins).allow_methods(Any).allow_headers(Any))
}

/// Build the main application router with all endpoints and middleware.
///
/// Routes:
/// - `/api/*`: the records management API
/// - `/docs`: interactive OpenAPI documentation
/// - `/healthz`: liveness probe
/// - everything else: embedded admin UI with SPA fallback
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    use api::handlers::{
        classrooms, courses, departments, enrollments, exam_students, exams, hostel_admins, hostels, instructors, rooms,
        sections, stats, static_assets, students, time_slots,
    };

    let api_routes = Router::new()
        .route("/departments", get(departments::list_departments).post(departments::create_department))
        .route(
            "/departments/{dept_name}",
            axum::routing::put(departments::update_department).delete(departments::delete_department),
        )
        .route("/hostels", get(hostels::list_hostels).post(hostels::create_hostel))
        .route(
            "/hostels/{hostel_id}",
            axum::routing::put(hostels::update_hostel).delete(hostels::delete_hostel),
        )
        .route("/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route("/rooms/{room_id}", axum::routing::put(rooms::update_room).delete(rooms::delete_room))
        .route("/instructors", get(instructors::list_instructors).post(instructors::create_instructor))
        .route(
            "/instructors/{instructor_id}",
            axum::routing::put(instructors::update_instructor).delete(instructors::delete_instructor),
        )
        .route(
            "/hostel-admins",
            get(hostel_admins::list_hostel_admins).post(hostel_admins::create_hostel_admin),
        )
        .route(
            "/hostel-admins/{instructor_id}/{hostel_id}",
            delete(hostel_admins::delete_hostel_admin),
        )
        .route("/students", get(students::list_students).post(students::create_student))
        .route(
            "/students/{student_id}",
            axum::routing::put(students::update_student).delete(students::delete_student),
        )
        .route("/courses", get(courses::list_courses).post(courses::create_course))
        .route(
            "/courses/{course_id}",
            axum::routing::put(courses::update_course).delete(courses::delete_course),
        )
        .route("/sections", get(sections::list_sections).post(sections::create_section))
        .route(
            "/sections/{section_id}",
            axum::routing::put(sections::update_section).delete(sections::delete_section),
        )
        .route("/classrooms", get(classrooms::list_classrooms).post(classrooms::create_classroom))
        .route(
            "/classrooms/{building}/{room_number}",
            axum::routing::put(classrooms::update_classroom).delete(classrooms::delete_classroom),
        )
        .route("/timeslots", get(time_slots::list_time_slots).post(time_slots::create_time_slot))
        .route(
            "/timeslots/{time_slot_id}",
            axum::routing::put(time_slots::update_time_slot).delete(time_slots::delete_time_slot),
        )
        .route("/exams", get(exams::list_exams).post(exams::create_exam))
        .route("/exams/{exam_code}", axum::routing::put(exams::update_exam).delete(exams::delete_exam))
        .route(
            "/exam-students",
            get(exam_students::list_exam_students).post(exam_students::create_exam_student),
        )
        .route(
            "/exam-students/{exam_code}/{student_id}",
            axum::routing::put(exam_students::update_exam_student).delete(exam_students::delete_exam_student),
        )
        .route("/enrollments", get(enrollments::list_enrollments).post(enrollments::create_enrollment))
        .route(
            "/enrollments/{enrollment_id}",
            axum::routing::put(enrollments::update_enrollment).delete(enrollments::delete_enrollment),
        )
        .route("/stats", get(stats::get_stats))
        .with_state(state.clone());

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .nest("/api", api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .fallback(get(static_assets::serve_embedded_asset));

    let cors_layer = create_cors_layer(&state.config)?;

    let router = router.layer(cors_layer).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// The assembled application: a router plus the resources it serves from.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance: connect, migrate, build the router.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = PgPool::connect(&config.database_url).await?;
        migrator().run(&pool).await?;

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    /// Start serving the application until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Registrar listening on http://{bind_addr}");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
