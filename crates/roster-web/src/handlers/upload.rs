//! CSV upload form and import.
//!
//! A failed import re-renders the form with one message; nothing is written.

use axum::{
  extract::{Multipart, State, multipart::MultipartError},
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
};
use bytes::Bytes;
use roster_core::store::ContactStore;

use crate::{AppState, handlers::LIST_PATH, views};

/// Name of the multipart field carrying the file.
pub const FILE_FIELD: &str = "file";

/// `GET /contacts/upload`
pub async fn form() -> Html<String> { Html(views::upload_page(None)) }

/// Return the bytes of the first `file` field. A missing field reads as an
/// empty upload.
async fn read_file_field(multipart: &mut Multipart) -> Result<Bytes, MultipartError> {
  while let Some(field) = multipart.next_field().await? {
    if field.name() == Some(FILE_FIELD) {
      return field.bytes().await;
    }
  }
  Ok(Bytes::new())
}

/// `POST /contacts/upload`
pub async fn submit<S>(State(state): State<AppState<S>>, mut multipart: Multipart) -> Response
where
  S: ContactStore + 'static,
{
  let bytes = match read_file_field(&mut multipart).await {
    Ok(b) => b,
    Err(e) => {
      tracing::warn!(error = %e, "unreadable upload");
      let message = format!("The upload could not be read: {}", e.body_text());
      return (e.status(), Html(views::upload_page(Some(&message)))).into_response();
    }
  };

  match state.service.import_csv(&bytes).await {
    Ok(_) => Redirect::to(LIST_PATH).into_response(),
    Err(e) => {
      (StatusCode::OK, Html(views::upload_page(Some(&e.user_message())))).into_response()
    }
  }
}
