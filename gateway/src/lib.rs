//! fxquote Gateway
//!
//! HTTP front end serving `GET /convert` against the fixed rate table.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod state;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
