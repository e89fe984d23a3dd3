//! [`ContactService`] — orchestration between the importer and the store.
//!
//! Holds no state of its own beyond the store handle; every call is a single
//! request/response against the store.

use std::sync::Arc;

use roster_core::{
  Contact, ContactId,
  store::{ContactStore, StoreError},
  validate::{Violations, validate},
};
use thiserror::Error;

/// Everything an operation on [`ContactService`] can fail with.
#[derive(Debug, Error)]
pub enum ServiceError {
  #[error("no file selected or file is empty")]
  EmptyFile,

  #[error("import failed: {0}")]
  Import(#[source] roster_csv::Error),

  #[error("contact not found: {0}")]
  NotFound(ContactId),

  #[error("validation failed: {0}")]
  Validation(Violations),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<roster_csv::Error> for ServiceError {
  fn from(e: roster_csv::Error) -> Self {
    if e.is_empty_file() { Self::EmptyFile } else { Self::Import(e) }
  }
}

impl ServiceError {
  /// Text safe to show on a form. Store failures are reduced to a generic
  /// sentence; the detail only goes to the log.
  pub fn user_message(&self) -> String {
    match self {
      Self::EmptyFile => "No file selected or file is empty.".to_owned(),
      Self::Import(e) => format!("An error occurred while uploading the file: {e}"),
      Self::NotFound(id) => format!("Contact {id} was not found."),
      Self::Validation(v) => v.to_string(),
      Self::Store(_) => "The contacts could not be saved. Please try again.".to_owned(),
    }
  }
}

fn classify<E: StoreError>(err: E, id: ContactId) -> ServiceError {
  if err.is_not_found() {
    ServiceError::NotFound(id)
  } else {
    ServiceError::Store(Box::new(err))
  }
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Import, list, edit and delete contacts through a [`ContactStore`].
pub struct ContactService<S> {
  store: Arc<S>,
}

impl<S> Clone for ContactService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: ContactStore> ContactService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Parse `bytes` as a contacts CSV and insert every row in one batch.
  ///
  /// Returns the number of imported contacts. On any failure nothing is
  /// written.
  pub async fn import_csv(&self, bytes: &[u8]) -> Result<usize, ServiceError> {
    let contacts = roster_csv::parse(bytes).map_err(|e| {
      tracing::warn!(error = %e, size = bytes.len(), "rejected CSV upload");
      ServiceError::from(e)
    })?;

    let count = contacts.len();
    self.store.insert_batch(contacts).await.map_err(|e| {
      tracing::error!(error = %e, count, "failed to persist imported contacts");
      ServiceError::Store(Box::new(e))
    })?;

    tracing::info!(count, "imported contacts from CSV");
    Ok(count)
  }

  pub async fn list_contacts(&self) -> Result<Vec<Contact>, ServiceError> {
    self
      .store
      .list_all()
      .await
      .map_err(|e| ServiceError::Store(Box::new(e)))
  }

  pub async fn get_contact(&self, id: ContactId) -> Result<Contact, ServiceError> {
    self
      .store
      .find_by_id(id)
      .await
      .map_err(|e| classify(e, id))?
      .ok_or(ServiceError::NotFound(id))
  }

  /// Validate and overwrite every mutable field of `contact`.
  pub async fn update_contact(&self, contact: Contact) -> Result<(), ServiceError> {
    let (id, fields) = contact.into_parts();
    if let Err(violations) = validate(&fields) {
      tracing::warn!(id, %violations, "rejected contact update");
      return Err(ServiceError::Validation(violations));
    }

    self
      .store
      .update(fields.with_id(id))
      .await
      .map_err(|e| classify(e, id))?;
    tracing::info!(id, "updated contact");
    Ok(())
  }

  pub async fn delete_contact(&self, id: ContactId) -> Result<(), ServiceError> {
    self.store.delete(id).await.map_err(|e| classify(e, id))?;
    tracing::info!(id, "deleted contact");
    Ok(())
  }
}
