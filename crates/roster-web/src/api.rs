//! Read-only JSON endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/contacts` | All contacts in insertion order |
//! | `GET`  | `/api/contacts/{id}` | 404 if not found |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::{Contact, ContactId, store::ContactStore};
use serde_json::json;
use thiserror::Error;

use crate::{AppState, service::ServiceError};

/// An error returned by a JSON handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] ServiceError),
}

impl From<ServiceError> for ApiError {
  fn from(e: ServiceError) -> Self {
    match e {
      ServiceError::NotFound(id) => Self::NotFound(format!("contact {id} not found")),
      other => Self::Store(other),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "api request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.user_message())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

/// `GET /api/contacts`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore + 'static,
{
  Ok(Json(state.service.list_contacts().await?))
}

/// `GET /api/contacts/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<ContactId>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore + 'static,
{
  Ok(Json(state.service.get_contact(id).await?))
}
