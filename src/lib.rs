//! Resume upload backend
//!
//! Accepts a resume upload, extracts text from PDFs, and returns a short
//! preview with basic metadata.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::{create_router, AppState};
