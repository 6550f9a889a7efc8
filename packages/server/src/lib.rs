//! Chat room API server library.
//!
//! Clients register with a username, create short-lived community rooms, and
//! list rooms alongside operator-pinned "today's topic" rooms.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
