//! Start-up errors.
//!
//! Everything after start-up is total: missing elements and unmounted targets are
//! silent no-ops, so the only failures are malformed embedded data.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse portfolio content: {0}")]
    Content(#[source] toml::de::Error),

    #[error("failed to parse portfolio config: {0}")]
    Config(#[source] toml::de::Error),

    #[error("portfolio content lists no experiences")]
    NoExperiences,

    #[error("visibility threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f32),

    #[error("{0} interval must be greater than zero")]
    ZeroInterval(&'static str),
}
