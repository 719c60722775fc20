use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::service::DecisionHelperService;
use super::storage::{SessionId, StateStore};

/// Router builder exposing the decision helper session endpoints.
pub fn helper_router<S>(service: Arc<DecisionHelperService<S>>) -> Router
where
    S: StateStore + 'static,
{
    Router::new()
        .route("/api/v1/helper/questions", get(questions_handler::<S>))
        .route(
            "/api/v1/helper/sessions/:session_id",
            get(state_handler::<S>),
        )
        .route(
            "/api/v1/helper/sessions/:session_id/answers",
            post(answer_handler::<S>),
        )
        .route(
            "/api/v1/helper/sessions/:session_id/back",
            post(back_handler::<S>),
        )
        .route(
            "/api/v1/helper/sessions/:session_id/edit",
            post(edit_handler::<S>),
        )
        .route(
            "/api/v1/helper/sessions/:session_id/results",
            post(return_to_results_handler::<S>),
        )
        .route(
            "/api/v1/helper/sessions/:session_id/restart",
            post(restart_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) question_id: String,
    pub(crate) value: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EditRequest {
    pub(crate) question_id: String,
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<DecisionHelperService<S>>>,
) -> Response
where
    S: StateStore + 'static,
{
    (StatusCode::OK, Json(service.catalog().questions().to_vec())).into_response()
}

pub(crate) async fn state_handler<S>(
    State(service): State<Arc<DecisionHelperService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: StateStore + 'static,
{
    let session = SessionId(session_id);
    (StatusCode::OK, Json(service.state(&session))).into_response()
}

pub(crate) async fn answer_handler<S>(
    State(service): State<Arc<DecisionHelperService<S>>>,
    Path(session_id): Path<String>,
    Json(request): Json<AnswerRequest>,
) -> Response
where
    S: StateStore + 'static,
{
    let session = SessionId(session_id);
    let view = service.answer(&session, &request.question_id, &request.value);
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn back_handler<S>(
    State(service): State<Arc<DecisionHelperService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: StateStore + 'static,
{
    let session = SessionId(session_id);
    (StatusCode::OK, Json(service.back(&session))).into_response()
}

pub(crate) async fn edit_handler<S>(
    State(service): State<Arc<DecisionHelperService<S>>>,
    Path(session_id): Path<String>,
    Json(request): Json<EditRequest>,
) -> Response
where
    S: StateStore + 'static,
{
    let session = SessionId(session_id);
    let view = service.edit_answer(&session, &request.question_id);
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn return_to_results_handler<S>(
    State(service): State<Arc<DecisionHelperService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: StateStore + 'static,
{
    let session = SessionId(session_id);
    (StatusCode::OK, Json(service.return_to_results(&session))).into_response()
}

pub(crate) async fn restart_handler<S>(
    State(service): State<Arc<DecisionHelperService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: StateStore + 'static,
{
    let session = SessionId(session_id);
    (StatusCode::OK, Json(service.restart(&session))).into_response()
}
