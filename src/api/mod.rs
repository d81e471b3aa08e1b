//! HTTP API module for the Vacation Alert Engine.
//!
//! This module provides the REST endpoint that accepts a workbook upload
//! and returns the vacation alerts and summary metrics.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::ApiError;
pub use state::AppState;
