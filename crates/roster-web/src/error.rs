//! Error types and axum `IntoResponse` implementation for the HTML pages.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::service::ServiceError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("service error: {0}")]
  Service(#[source] ServiceError),
}

impl From<ServiceError> for Error {
  fn from(e: ServiceError) -> Self { Self::Service(e) }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Service(e @ ServiceError::NotFound(_)) => {
        (StatusCode::NOT_FOUND, e.user_message()).into_response()
      }
      Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
      Error::Service(e) => {
        tracing::error!(error = %e, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.user_message()).into_response()
      }
    }
  }
}
