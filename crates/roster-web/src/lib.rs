//! HTTP layer for Roster.
//!
//! Exposes an axum [`Router`] serving the CSV upload form, the contact listing
//! and the edit/delete pages, plus a small read-only JSON API, backed by any
//! [`ContactStore`].

pub mod api;
pub mod error;
pub mod form;
pub mod handlers;
pub mod service;
pub mod views;

pub use error::Error;
pub use service::{ContactService, ServiceError};

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, post},
};
use roster_core::store::ContactStore;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use handlers::{delete, edit, list, upload};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROSTER_*` environment variables.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  pub store_path:       PathBuf,
  /// Upper bound on request bodies, uploads included.
  pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             "127.0.0.1".to_owned(),
      port:             8080,
      store_path:       PathBuf::from("roster.db"),
      max_upload_bytes: 8 * 1024 * 1024,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub service: ContactService<S>,
  pub config:  Arc<ServerConfig>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      service: self.service.clone(),
      config:  Arc::clone(&self.config),
    }
  }
}

impl<S: ContactStore> AppState<S> {
  pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
    Self {
      service: ContactService::new(store),
      config:  Arc::new(config),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the whole application.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ContactStore + 'static,
{
  let body_limit = state.config.max_upload_bytes;

  Router::new()
    .route("/",                      get(handlers::index))
    .route("/contacts",              get(list::handler::<S>))
    .route("/contacts/upload",       get(upload::form).post(upload::submit::<S>))
    .route("/contacts/edit",         post(edit::submit::<S>))
    .route("/contacts/edit/{id}",    get(edit::form::<S>))
    .route("/contacts/delete/{id}",  get(delete::confirm::<S>).post(delete::submit::<S>))
    .route("/api/contacts",          get(api::list::<S>))
    .route("/api/contacts/{id}",     get(api::get_one::<S>))
    .layer(DefaultBodyLimit::max(body_limit))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
