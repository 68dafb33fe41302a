//! Rehla travel administration server
//!
//! A Rust REST API backend for the Rehla UAE travel-booking admin dashboard,
//! managing attractions, hotels, transport options, customer travel
//! submissions, and bookings.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
