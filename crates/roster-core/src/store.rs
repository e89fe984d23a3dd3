//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-sqlite`). The service
//! and HTTP layers depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::contact::{Contact, ContactId, NewContact};

/// Error bound for store backends.
///
/// Lets callers tell "no such contact" apart from a genuine storage failure
/// without knowing the backend's concrete error type.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn is_not_found(&self) -> bool;
}

/// Abstraction over a Roster contact store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`). Backends do not retry.
pub trait ContactStore: Send + Sync {
  type Error: StoreError;

  /// Assign fresh ids to `contacts` and persist them atomically: either every
  /// record becomes durable or none does. An empty batch is a no-op.
  fn insert_batch(
    &self,
    contacts: Vec<NewContact>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// All contacts in insertion order.
  fn list_all(&self) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Overwrite every field except the id.
  ///
  /// Fails with a not-found error if `contact.id` does not exist, leaving the
  /// store untouched.
  fn update(&self, contact: Contact) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Remove exactly one contact. Fails with a not-found error if absent.
  fn delete(&self, id: ContactId) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
