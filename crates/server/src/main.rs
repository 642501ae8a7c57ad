// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{
        Path, Query, State as AxumState,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use staffing_api::{
    ApiError, AssignmentRequest, AssignmentResponse, ConsultantResponse, CreateAssignmentResponse,
    CreateConsultantRequest, CreateProjectRequest, DedicationQuery, DedicationResponse,
    DeleteResponse, HourLogFilter, HourLogResponse, ProjectResponse, RegisterHoursRequest,
    ValidateAssignmentQuery, ValidateAssignmentResponse, create_assignment, create_consultant, create_project,
    delete_assignment, delete_hour_log, get_assignment, get_consultant, get_dedication,
    get_hour_log, get_project, list_consultant_assignments, list_consultants, list_hour_logs,
    list_project_assignments, list_projects, register_hours, update_assignment,
    validate_assignment,
};
use staffing_persistence::Persistence;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Staffing Server - HTTP server for consultant allocation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,
}

/// Application state shared across handlers.
///
/// The engine's serialized sections run on this single connection, so the
/// mutex is held for the whole of each request.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// The violated rule or offending field, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    status: StatusCode,
    reason: Option<String>,
    message: String,
}

impl HttpError {
    fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            reason: None,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            reason: self.reason,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let (status, reason): (StatusCode, Option<String>) = match &err {
            ApiError::ResourceNotFound { resource_type, .. } => {
                (StatusCode::NOT_FOUND, Some(resource_type.clone()))
            }
            ApiError::DomainRuleViolation { rule, .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some(rule.clone()))
            }
            ApiError::Conflict { rule, .. } => (StatusCode::CONFLICT, Some(rule.clone())),
            ApiError::InvalidInput { field, .. } => (StatusCode::BAD_REQUEST, Some(field.clone())),
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };
        Self {
            status,
            reason,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "Rejected request body");
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(error = %rejection, "Rejected query string");
        Self::bad_request(rejection.body_text())
    }
}

// ============================================================================
// Consultants
// ============================================================================

async fn handle_create_consultant(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateConsultantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ConsultantResponse>), HttpError> {
    let Json(req) = payload?;
    info!(name = %req.name, "Handling create_consultant request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ConsultantResponse = create_consultant(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_list_consultants(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<ConsultantResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_consultants(&mut persistence)?))
}

async fn handle_get_consultant(
    AxumState(app_state): AxumState<AppState>,
    Path(consultant_id): Path<i64>,
) -> Result<Json<ConsultantResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_consultant(&mut persistence, consultant_id)?))
}

async fn handle_list_consultant_assignments(
    AxumState(app_state): AxumState<AppState>,
    Path(consultant_id): Path<i64>,
) -> Result<Json<Vec<AssignmentResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_consultant_assignments(
        &mut persistence,
        consultant_id,
    )?))
}

/// Handler for GET `/consultants/{id}/dedication`.
///
/// Reports committed and remaining dedication over `start_date..=end_date`.
async fn handle_get_dedication(
    AxumState(app_state): AxumState<AppState>,
    Path(consultant_id): Path<i64>,
    query: Result<Query<DedicationQuery>, QueryRejection>,
) -> Result<Json<DedicationResponse>, HttpError> {
    let Query(query) = query?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_dedication(&mut persistence, consultant_id, &query)?))
}

// ============================================================================
// Projects
// ============================================================================

async fn handle_create_project(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectResponse>), HttpError> {
    let Json(req) = payload?;
    info!(name = %req.name, "Handling create_project request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ProjectResponse = create_project(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_list_projects(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_projects(&mut persistence)?))
}

async fn handle_get_project(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<ProjectResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_project(&mut persistence, project_id)?))
}

async fn handle_list_project_assignments(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<Vec<AssignmentResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_project_assignments(&mut persistence, project_id)?))
}

// ============================================================================
// Assignments
// ============================================================================

/// Handler for POST `/assignments`.
async fn handle_create_assignment(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAssignmentResponse>), HttpError> {
    let Json(req) = payload?;
    info!(
        consultant_id = req.consultant_id,
        project_id = req.project_id,
        dedication = ?req.dedication,
        "Handling create_assignment request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateAssignmentResponse = create_assignment(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/assignments/validate`.
///
/// Runs every assignment check without storing anything. Pass
/// `?exclude_assignment_id=` to check the body as an update of that
/// assignment.
async fn handle_validate_assignment(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ValidateAssignmentQuery>, QueryRejection>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Result<Json<ValidateAssignmentResponse>, HttpError> {
    let Query(query) = query?;
    let Json(req) = payload?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(validate_assignment(&mut persistence, &req, &query)?))
}

async fn handle_get_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<i64>,
) -> Result<Json<AssignmentResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_assignment(&mut persistence, assignment_id)?))
}

async fn handle_update_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<i64>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Result<Json<AssignmentResponse>, HttpError> {
    let Json(req) = payload?;
    info!(assignment_id, "Handling update_assignment request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_assignment(
        &mut persistence,
        assignment_id,
        &req,
    )?))
}

async fn handle_delete_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<i64>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(assignment_id, "Handling delete_assignment request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(delete_assignment(&mut persistence, assignment_id)?))
}

// ============================================================================
// Hour logs
// ============================================================================

/// Handler for POST `/hour_logs`.
async fn handle_register_hours(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<RegisterHoursRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<HourLogResponse>), HttpError> {
    let Json(req) = payload?;
    info!(
        consultant_id = req.consultant_id,
        project_id = req.project_id,
        work_date = %req.work_date,
        "Handling register_hours request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: HourLogResponse = register_hours(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_list_hour_logs(
    AxumState(app_state): AxumState<AppState>,
    filter: Result<Query<HourLogFilter>, QueryRejection>,
) -> Result<Json<Vec<HourLogResponse>>, HttpError> {
    let Query(filter) = filter?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_hour_logs(&mut persistence, &filter)?))
}

async fn handle_get_hour_log(
    AxumState(app_state): AxumState<AppState>,
    Path(hour_log_id): Path<i64>,
) -> Result<Json<HourLogResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_hour_log(&mut persistence, hour_log_id)?))
}

async fn handle_delete_hour_log(
    AxumState(app_state): AxumState<AppState>,
    Path(hour_log_id): Path<i64>,
) -> Result<Json<DeleteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(delete_hour_log(&mut persistence, hour_log_id)?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/consultants",
            post(handle_create_consultant).get(handle_list_consultants),
        )
        .route("/consultants/{id}", get(handle_get_consultant))
        .route(
            "/consultants/{id}/assignments",
            get(handle_list_consultant_assignments),
        )
        .route("/consultants/{id}/dedication", get(handle_get_dedication))
        .route(
            "/projects",
            post(handle_create_project).get(handle_list_projects),
        )
        .route("/projects/{id}", get(handle_get_project))
        .route(
            "/projects/{id}/assignments",
            get(handle_list_project_assignments),
        )
        .route("/assignments", post(handle_create_assignment))
        .route("/assignments/validate", post(handle_validate_assignment))
        .route(
            "/assignments/{id}",
            get(handle_get_assignment)
                .put(handle_update_assignment)
                .delete(handle_delete_assignment),
        )
        .route(
            "/hour_logs",
            post(handle_register_hours).get(handle_list_hour_logs),
        )
        .route(
            "/hour_logs/{id}",
            get(handle_get_hour_log).delete(handle_delete_hour_log),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Staffing Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
