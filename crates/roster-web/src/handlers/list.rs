//! `GET /contacts` — table of every stored contact.

use axum::{extract::State, response::Html};
use roster_core::store::ContactStore;

use crate::{AppState, error::Error, views};

pub async fn handler<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: ContactStore + 'static,
{
  let contacts = state.service.list_contacts().await?;
  Ok(Html(views::list_page(&contacts)))
}
