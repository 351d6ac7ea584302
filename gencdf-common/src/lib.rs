pub mod config;
pub use config::Config;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("line {line}: column {column} requested but line has only {tokens} token(s)")]
    Column {
        line: usize,
        column: usize,
        tokens: usize,
    },
    #[error("line {line}: token {token:?} is not a finite number")]
    Number { line: usize, token: String },
    #[error("no data: zero values ingested")]
    NoData,
    #[error("padding increment must be positive, got {0}")]
    Increment(f64),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CdfError>;
