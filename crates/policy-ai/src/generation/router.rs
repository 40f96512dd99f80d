use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{PolicyId, RawQuestionnaire};
use super::repository::{PolicyRepository, RepositoryError};
use super::service::{PolicyService, PolicyServiceError};

/// Router builder exposing HTTP endpoints for policy generation and storage.
pub fn policy_router<R>(service: Arc<PolicyService<R>>) -> Router
where
    R: PolicyRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/policies",
            post(generate_handler::<R>).get(list_handler::<R>),
        )
        .route("/api/v1/policies/preview", post(preview_handler::<R>))
        .route(
            "/api/v1/policies/:policy_id",
            get(get_handler::<R>).delete(delete_handler::<R>),
        )
        .with_state(service)
}

fn error_response(error: PolicyServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    let status = match &error {
        PolicyServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PolicyServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        PolicyServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        PolicyServiceError::Invariant(_)
        | PolicyServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn generate_handler<R>(
    State(service): State<Arc<PolicyService<R>>>,
    axum::Json(raw): axum::Json<RawQuestionnaire>,
) -> Response
where
    R: PolicyRepository + 'static,
{
    match service.generate(raw) {
        Ok(document) => {
            let payload = json!({
                "policyId": document.id.0,
                "status": "complete",
                "policy": document,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<PolicyService<R>>>,
    axum::Json(raw): axum::Json<RawQuestionnaire>,
) -> Response
where
    R: PolicyRepository + 'static,
{
    match service.preview(raw) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<PolicyService<R>>>,
    Path(policy_id): Path<String>,
) -> Response
where
    R: PolicyRepository + 'static,
{
    let id = PolicyId(policy_id);
    match service.get(&id) {
        Ok(document) => (StatusCode::OK, axum::Json(document)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<PolicyService<R>>>,
    Path(policy_id): Path<String>,
) -> Response
where
    R: PolicyRepository + 'static,
{
    let id = PolicyId(policy_id);
    match service.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<PolicyService<R>>>,
) -> Response
where
    R: PolicyRepository + 'static,
{
    match service.list() {
        Ok(summaries) => (StatusCode::OK, axum::Json(summaries)).into_response(),
        Err(error) => error_response(error),
    }
}
