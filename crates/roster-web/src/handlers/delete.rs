//! Delete confirmation and removal.

use axum::{
  extract::{Path, State},
  response::{Html, Redirect},
};
use roster_core::{ContactId, store::ContactStore};

use crate::{AppState, error::Error, handlers::LIST_PATH, views};

/// `GET /contacts/delete/{id}`
pub async fn confirm<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<ContactId>,
) -> Result<Html<String>, Error>
where
  S: ContactStore + 'static,
{
  let contact = state.service.get_contact(id).await?;
  Ok(Html(views::delete_page(&contact)))
}

/// `POST /contacts/delete/{id}`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<ContactId>,
) -> Result<Redirect, Error>
where
  S: ContactStore + 'static,
{
  state.service.delete_contact(id).await?;
  Ok(Redirect::to(LIST_PATH))
}
