//! Error types for container configuration.

use thiserror::Error;

/// Fill-rate threshold outside the `0..=100` percent range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("min fill-rate {value}% exceeds 100%")]
pub struct InvalidFillRate {
    /// The rejected percentage.
    pub value: u8,
}
