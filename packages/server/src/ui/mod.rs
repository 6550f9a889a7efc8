//! HTTP server: routing, handlers and bootstrap.

pub mod error;
pub mod extract;
mod handler;
pub mod router;
mod runner;
mod signal;
pub mod state;

pub use router::build_router;
pub use runner::{build_state, run, serve};
pub use signal::shutdown_signal;
