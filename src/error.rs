//! Error types shared by every stage of a run.
//!
//! Configuration errors are raised before any buffer is allocated,
//! shape errors before any element of `next` is written.
//! Nothing is corrected silently and nothing is retried.

use thiserror::Error;

pub type StencilResult<T> = Result<T, StencilError>;

#[derive(Error, Debug)]
pub enum StencilError {
    #[error("num_points must be at least 1, got {num_points}")]
    InvalidPointCount { num_points: i64 },

    #[error("num_timesteps must be non-negative, got {num_timesteps}")]
    InvalidStepCount { num_timesteps: i64 },

    #[error("chunk size must be at least 1")]
    InvalidChunkSize,

    #[error("partition count must be at least 1")]
    InvalidPartitionCount,

    #[error("thread count must be at least 1")]
    InvalidThreadCount,

    #[error("coefficient {name} must be finite, got {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },

    /// Initial values may only be written to interior points `1..=N`.
    #[error("index {index} is not an interior point of a field with {num_points} points")]
    ImpulseOutOfRange { index: usize, num_points: usize },

    #[error("invalid initial condition: {reason}")]
    InvalidInitialCondition { reason: String },

    #[error("field of length {len} has no interior points (need at least 3)")]
    FieldTooSmall { len: usize },

    #[error("buffer length mismatch: current has {current} values, next has {next}")]
    LengthMismatch { current: usize, next: usize },

    #[error("failed to allocate {points} values ({bytes} bytes)")]
    Allocation {
        points: usize,
        bytes: usize,
        #[source]
        source: std::collections::TryReserveError,
    },

    #[error("failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
