// ❗ Kata Errors - one enum for the whole library
// DuplicateKey and Overflow are domain errors; the rest cover config, fixtures, the runner and the worker pool

use thiserror::Error;

/// Result type for kata operations
pub type Result<T> = std::result::Result<T, KataError>;

#[derive(Error, Debug)]
pub enum KataError {
    /// Two records produced the same composite key under `DuplicateKeyPolicy::Reject`
    #[error("Duplicate key: {key}")]
    DuplicateKey { key: String },

    /// Doubling or summing left the `i64` range
    #[error("Arithmetic overflow in {0} pipeline")]
    Overflow(&'static str),

    /// Fixture CSV named in the config could not be loaded
    #[error("Fixture error: {0:#}")]
    Fixture(#[from] anyhow::Error),

    /// Runner was asked for a kata it does not know
    #[error("Unknown kata: {0}")]
    UnknownKata(String),

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `KataConfig`
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// Dedicated rayon pool could not be built
    #[error("Worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
