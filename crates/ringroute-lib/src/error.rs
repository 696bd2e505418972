use thiserror::Error;

/// Convenient result alias for the ring route library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a platform identifier falls outside `1..=platform_count`.
    #[error("platform {platform} is outside the valid range 1..={platform_count}")]
    PlatformOutOfRange { platform: u32, platform_count: usize },

    /// Raised when a graph is requested with no platforms or more than fit in a [`crate::PlatformId`].
    #[error("platform count {count} is not supported; expected 1..=255")]
    InvalidPlatformCount { count: usize },

    /// Raised when an edge carries a negative or non-finite travel time.
    #[error("travel time {time} from platform {from} is not a finite non-negative number")]
    InvalidTravelTime { from: u32, time: f64 },

    /// Raised when search limits cannot describe a usable search.
    #[error("invalid search configuration: {message}")]
    InvalidSearchConfig { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
