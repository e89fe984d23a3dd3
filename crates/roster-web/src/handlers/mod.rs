pub mod delete;
pub mod edit;
pub mod list;
pub mod upload;

use axum::response::Redirect;

pub(crate) const LIST_PATH: &str = "/contacts";
pub(crate) const UPLOAD_PATH: &str = "/contacts/upload";

/// `GET /` — the listing is the home page.
pub async fn index() -> Redirect { Redirect::to(LIST_PATH) }
