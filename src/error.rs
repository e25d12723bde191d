use thiserror::Error;

/// Raised when a source interval cannot be mapped from.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("degenerate source interval [{min}, {max}]: span must be non-zero and finite")]
    DegenerateInterval { min: f64, max: f64 },
}

/// Raised when a bin table is rejected at construction.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    #[error("bin {index} has a non-finite bound ({lower}, {upper}]")]
    NonFiniteBound { index: usize, lower: f64, upper: f64 },

    #[error("bin {index} is empty: lower bound {lower} is not below upper bound {upper}")]
    EmptyBin { index: usize, lower: f64, upper: f64 },

    #[error("bin {index} starts at {lower}, before the previous bin starts at {previous_lower}")]
    Unsorted {
        index: usize,
        lower: f64,
        previous_lower: f64,
    },

    #[error("bin {index} starts at {lower}, inside the previous bin ending at {previous_upper}")]
    Overlapping {
        index: usize,
        lower: f64,
        previous_upper: f64,
    },
}
