//! Web layer for the rail network.
//!
//! Provides read-only HTTP endpoints for regions, hubs, journeys and fares.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
