//! Retry and timeout profile for the downstream clients.

use std::time::Duration;

use crate::error::ConfigError;

/// Default number of retries after the first attempt.
pub const DEFAULT_RETRIES: u32 = 2;

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Default wait between attempts when the server gives no `Retry-After`.
pub const DEFAULT_RETRY_WAIT: Duration = Duration::from_secs(1);

/// Largest retry count accepted at startup.
pub const MAX_RETRIES: u32 = 10;

/// Largest per-attempt timeout accepted at startup.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(300);

/// Retry and timeout policy applied to every operation of a client.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use search_facade::ClientOptions;
///
/// let options = ClientOptions::default();
/// assert_eq!(options.retries(), 2);
/// assert_eq!(options.timeout(), Duration::from_millis(15_000));
/// assert_eq!(options.tries(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    retries: u32,
    timeout: Duration,
    retry_wait: Duration,
}

impl ClientOptions {
    /// Creates a validated profile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooManyRetries`] if `retries` exceeds [`MAX_RETRIES`],
    /// or [`ConfigError::InvalidTimeout`] if `timeout` is zero or above [`MAX_TIMEOUT`].
    pub fn new(retries: u32, timeout: Duration) -> Result<Self, ConfigError> {
        let options = Self {
            retries,
            timeout,
            retry_wait: DEFAULT_RETRY_WAIT,
        };
        options.validate()?;
        Ok(options)
    }

    /// Overrides the wait between attempts.
    #[must_use]
    pub const fn with_retry_wait(mut self, retry_wait: Duration) -> Self {
        self.retry_wait = retry_wait;
        self
    }

    /// Number of retries after the first attempt.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Total number of attempts a request may make.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Per-attempt timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Wait between attempts when the server gives no hint.
    #[must_use]
    pub const fn retry_wait(&self) -> Duration {
        self.retry_wait
    }

    /// Checks the profile against the accepted ranges.
    ///
    /// # Errors
    ///
    /// See [`ClientOptions::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retries > MAX_RETRIES {
            return Err(ConfigError::TooManyRetries {
                retries: self.retries,
                max: MAX_RETRIES,
            });
        }
        if self.timeout.is_zero() || self.timeout > MAX_TIMEOUT {
            return Err(ConfigError::InvalidTimeout {
                millis: self.timeout.as_millis(),
                max_millis: MAX_TIMEOUT.as_millis(),
            });
        }
        Ok(())
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            timeout: DEFAULT_TIMEOUT,
            retry_wait: DEFAULT_RETRY_WAIT,
        }
    }
}

/// Named client profiles.
///
/// Only the `default` profile exists, and it is applied to every operation of
/// both downstream clients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientsConfig {
    /// The `default` profile.
    pub default: ClientOptions,
}

impl ClientsConfig {
    /// Creates a configuration with the given `default` profile.
    #[must_use]
    pub const fn new(default: ClientOptions) -> Self {
        Self { default }
    }

    /// Returns the profile used for downstream operations.
    #[must_use]
    pub const fn options(&self) -> &ClientOptions {
        &self.default
    }
}
