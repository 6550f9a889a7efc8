//! Server startup and runtime errors.

use thiserror::Error;

use crate::infrastructure::seed::SeedError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
