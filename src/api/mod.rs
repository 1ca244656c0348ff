//! HTTP API module for the NI engine.
//!
//! This module provides the REST API endpoints for comparing pension
//! distribution strategies and listing the presets and rate tables.

mod handlers;
mod request;
mod response;
mod server;
mod state;

pub use handlers::create_router;
pub use request::{CUSTOM_STRATEGY, CalculationRequest, ResolvedStrategy};
pub use response::{ApiError, PresetInfo};
pub use server::run_server;
pub use state::AppState;
