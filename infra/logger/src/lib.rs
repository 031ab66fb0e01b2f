//! # Logger
//!
//! Logging setup for verifier runs.
//! It installs a global `tracing` subscriber with environment-based filtering, a console
//! layer (optionally routed through the test harness' captured output), and an optional
//! report file that keeps the full drift log of a run for CI artifacts.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"confdrift_engine=debug"`), in addition to `RUST_LOG`.
//! * Use [`LoggerBuilder::test_writer`] inside `#[test]` functions so output is captured
//!   per test instead of interleaving on stdout.
//! * The optional `json` feature switches the report file to structured JSON lines.
//!
//! ## Example
//!
//! ```rust
//! # use confdrift_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("yarn-fields")
//!     .console(true)
//!     .test_writer(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const REPORT_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    test_writer: bool,
    report_dir: Option<PathBuf>,
    level: LevelFilter,
    #[cfg_attr(not(feature = "json"), allow(dead_code))]
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            test_writer: false,
            report_dir: None,
            level: LevelFilter::INFO,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoReport;
#[derive(Debug)]
pub struct WithReport;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoReport {}
impl Sealed for WithReport {}

/// A builder for configuring and installing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, R: Sealed = NoReport> {
    config: LoggerConfig,
    name: N,
    report_state: PhantomData<R>,
}

impl<R: Sealed> LoggerBuilder<NoName, R> {
    /// Sets the run name, used as the report file name.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, R> {
        LoggerBuilder {
            name: WithName(name.into()),
            config: self.config,
            report_state: PhantomData,
        }
    }
}

impl LoggerBuilder<WithName, WithReport> {
    /// Writes the report file as JSON lines.
    #[cfg(feature = "json")]
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

impl<R: Sealed> LoggerBuilder<WithName, R> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `confdrift_engine=debug`).
    ///
    /// `RUST_LOG` is ignored when an explicit filter is set.
    /// Invalid filters cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Routes console output through the test harness so it is captured per test.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn test_writer(mut self, enabled: bool) -> Self {
        self.config.test_writer = enabled;
        self
    }

    /// Keeps a report file `<dir>/<name>.log` with every event of the run.
    pub fn report_dir(self, dir: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithReport> {
        let mut config = self.config;
        config.report_dir = Some(dir.into());
        LoggerBuilder { config, name: self.name, report_state: PhantomData }
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. When a report file is configured the handle owns the
    /// non-blocking writer's [`WorkerGuard`]; keep it alive until the run is over.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    /// Returns [`LoggerError::Appender`] if the report file cannot be created.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_name(&self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            let console = layer().compact().with_target(true);
            if self.config.test_writer {
                layers.push(console.with_ansi(false).with_test_writer().boxed());
            } else {
                layers.push(console.with_ansi(true).boxed());
            }
        }

        let guard = if let Some(dir) = self.config.report_dir {
            fs::create_dir_all(&dir).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create report dir: {}", dir.display()).into()),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(&self.name.0)
                .filename_suffix(REPORT_FILE_SUFFIX)
                .build(&dir)
                .context(format!("Report file in {}", dir.display()))?;

            let (non_blocking, g) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            #[cfg(feature = "json")]
            let boxed =
                if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() };
            #[cfg(not(feature = "json"))]
            let boxed = file_layer.boxed();

            layers.push(boxed);
            Some(g)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console output or a report file."
                    .into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// A handle to the installed logging system.
///
/// Dropping it flushes the report file, if one was configured.
#[must_use = "Dropping this handle stops the report file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use confdrift_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("verifier")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, report_state: PhantomData }
    }

    /// Returns the report writer guard, if a report file was configured.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing verifier report file");
        }
    }
}

fn validate_name(name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if name.contains(['/', '\\']) {
        return Err(LoggerError::InvalidConfiguration {
            message: format!("Logger name '{name}' must not contain path separators").into(),
            context: Some("The name doubles as the report file name".into()),
        });
    }
    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
