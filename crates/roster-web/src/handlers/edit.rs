//! Edit form and update.

use axum::{
  Form,
  extract::{Path, State},
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
};
use roster_core::{ContactId, store::ContactStore, validate::Violations};

use crate::{
  AppState,
  error::Error,
  form::ContactForm,
  handlers::LIST_PATH,
  service::ServiceError,
  views,
};

fn rejected(form: &ContactForm, violations: &Violations) -> Response {
  (StatusCode::UNPROCESSABLE_ENTITY, Html(views::edit_page(form, violations))).into_response()
}

/// `GET /contacts/edit/{id}`
pub async fn form<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<ContactId>,
) -> Result<Html<String>, Error>
where
  S: ContactStore + 'static,
{
  let contact = state.service.get_contact(id).await?;
  Ok(Html(views::edit_page(&ContactForm::from_contact(&contact), &Violations::new())))
}

/// `POST /contacts/edit`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<ContactForm>,
) -> Result<Response, Error>
where
  S: ContactStore + 'static,
{
  let id = form
    .contact_id()
    .ok_or_else(|| Error::BadRequest(format!("invalid contact id {:?}", form.id)))?;

  let contact = match form.to_contact(id) {
    Ok(c) => c,
    Err(violations) => {
      tracing::warn!(id, %violations, "edit form rejected");
      return Ok(rejected(&form, &violations));
    }
  };

  match state.service.update_contact(contact).await {
    Ok(()) => Ok(Redirect::to(LIST_PATH).into_response()),
    Err(ServiceError::Validation(violations)) => Ok(rejected(&form, &violations)),
    Err(e) => Err(e.into()),
  }
}
