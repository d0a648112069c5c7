//! HTTP surface of the service
//!
//! Routes, shared state, and the translation from lookup failures to
//! outward status codes.

mod server;

pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

// Public API for starting/stopping the webserver
pub use server::{build_app, shutdown, start_server};
pub use state::AppState;
