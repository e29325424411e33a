use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::{CandidateSource, ProducerKind, UnknownProducerKind};
use super::resolver::ProducerResolution;
use super::service::ProducerNameService;

/// Body accepted by the resolve endpoint. Both fields are required; they are optional
/// here so that missing values produce a client error instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl ResolveRequest {
    pub fn validate(self) -> Result<(ProducerKind, String), ResolveRequestError> {
        let kind = self
            .kind
            .filter(|kind| !kind.is_empty())
            .ok_or(ResolveRequestError::MissingKind)?;
        let value = self
            .value
            .filter(|value| !value.is_empty())
            .ok_or(ResolveRequestError::MissingValue)?;
        let kind = kind.parse::<ProducerKind>()?;
        Ok((kind, value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub resolution: ProducerResolution,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveRequestError {
    #[error("kind is required")]
    MissingKind,
    #[error("value is required")]
    MissingValue,
    #[error(transparent)]
    InvalidKind(#[from] UnknownProducerKind),
}

/// Router exposing producer name resolution.
pub fn producer_router<S>(service: Arc<ProducerNameService<S>>) -> Router
where
    S: CandidateSource + 'static,
{
    Router::new()
        .route("/api/v1/producers/resolve", post(resolve_handler::<S>))
        .with_state(service)
}

pub(crate) async fn resolve_handler<S>(
    State(service): State<Arc<ProducerNameService<S>>>,
    axum::Json(request): axum::Json<ResolveRequest>,
) -> Response
where
    S: CandidateSource + 'static,
{
    match request.validate() {
        Ok((kind, value)) => {
            let resolution = service.resolve(kind, &value);
            (StatusCode::OK, axum::Json(ResolveResponse { resolution })).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
