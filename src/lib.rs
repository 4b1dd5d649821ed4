// src/lib.rs

use std::sync::Arc;

use store::DataStore;

/// Shared application state: the immutable data context built once at
/// startup. Handlers only read, so cloning the state is an Arc bump.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
}

pub mod config;
pub mod error;
pub mod routes;

pub mod store;

pub mod services;

pub mod charts;

pub mod models;
pub mod handlers;
