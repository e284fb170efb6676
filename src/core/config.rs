//! Environment-backed configuration, read once at startup.

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Base URL of the admin backend's REST API.
/// Read from BUTTONS_API_URL, trailing slash optional.
pub static API_BASE_URL: Lazy<String> = Lazy::new(|| {
    env::var("BUTTONS_API_URL").unwrap_or_else(|_| "http://host.docker.internal:8000/api".to_string())
});

/// Static token sent as `Authorization: Token ...` to the backend.
/// Read from USER_TOKEN; empty means unauthenticated requests.
pub static USER_TOKEN: Lazy<String> = Lazy::new(|| env::var("USER_TOKEN").unwrap_or_default());

/// Log file path
/// Read from LOG_FILE environment variable
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE").unwrap_or_else(|_| "knopka.log".to_string()));

/// Telegram network configuration
pub mod network {
    use super::Duration;

    /// Timeout for Telegram Bot API requests (in seconds). Long polling
    /// holds a request open for tens of seconds, so this must stay above
    /// the poll interval.
    pub const TIMEOUT_SECS: u64 = 60;

    /// Telegram client timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECS)
    }
}

/// Backend API configuration
pub mod api {
    use super::Duration;

    /// Timeout for admin backend requests (in seconds). Short and fixed;
    /// a timeout is handled exactly like any other fetch failure.
    pub const TIMEOUT_SECS: u64 = 1;

    /// Backend request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECS)
    }
}

/// Traversal limits
pub mod traversal {
    /// Maximum number of id segments honored in a callback token. Also
    /// bounds serializer recursion over pathological parent graphs.
    pub const MAX_DEPTH: usize = 32;
}

/// Retry configuration
pub mod retry {
    use super::Duration;

    /// Maximum number of retries for dispatcher reconnection
    pub const MAX_DISPATCHER_RETRIES: u32 = 5;

    /// Delay between dispatcher retry attempts (in seconds)
    pub const DISPATCHER_RETRY_DELAY_SECS: u64 = 5;

    /// Dispatcher retry delay duration
    pub fn dispatcher_delay() -> Duration {
        Duration::from_secs(DISPATCHER_RETRY_DELAY_SECS)
    }

    /// Base for exponential backoff calculation
    pub const EXPONENTIAL_BACKOFF_BASE: u64 = 2;
}
