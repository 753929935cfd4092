pub mod cli;
pub mod index;
pub mod temporal;

pub use crate::index::CoreIndex;
pub use crate::temporal::{Interval, Intervals, Time, VertexId};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoraeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HoraeError>;

/// Version information for the Horae project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
