//! Level-gated logging for results.
//!
//! A [`Logger`] pairs a [`LogConfig`] with a [`LogSink`]. It is built once
//! and passed by reference to wherever results are logged; there is no
//! global logger.
//!
//! ```rust
//! use result_kit::{
//!     log::{Level, LogConfig, LogResult, Logger},
//!     ok, Result,
//! };
//!
//! let config = LogConfig::builder().level(Level::Debug).build();
//! let logger = Logger::tracing(config);
//!
//! let res: Result<u32, String> = ok(7)
//!     .debug(&logger, "loaded count")
//!     .err_warn(&logger, "count unavailable");
//! assert_eq!(res, ok(7));
//! ```

mod config;
mod level;
mod sink;

pub use config::{LogConfig, LogConfigError, ENV_PREFIX};
pub use level::Level;
pub use sink::{LogSink, TracingSink};

use crate::result::Result;
use paste::paste;
use std::{fmt, sync::Arc};

/// Writes values to a sink, dropping anything below the configured level.
#[derive(Clone)]
pub struct Logger {
    config: LogConfig,
    sink: Arc<dyn LogSink>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::tracing(LogConfig::default())
    }
}

macro_rules! severity_fns {
    ($($name:ident => $level:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Writes `value` at `", stringify!($name), "`.")]
            pub fn $name(&self, value: &dyn fmt::Debug, message: &str) {
                self.write(Level::$level, value, message)
            }
        )+
    };
}

impl Logger {
    pub fn new(config: LogConfig, sink: impl LogSink + 'static) -> Self {
        Self {
            config,
            sink: Arc::new(sink),
        }
    }

    /// A logger that forwards to [`tracing`].
    pub fn tracing(config: LogConfig) -> Self {
        Self::new(config, TracingSink)
    }

    /// A [`tracing`] logger configured from the environment.
    pub fn from_env() -> core::result::Result<Self, LogConfigError> {
        Ok(Self::tracing(LogConfig::from_env()?))
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Whether a write at `level` would reach the sink.
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::Silent && level >= self.config.level
    }

    /// Forwards `value` and `message` to the sink unless `level` is below
    /// the configured minimum.
    pub fn write(&self, level: Level, value: &dyn fmt::Debug, message: &str) {
        if !self.enabled(level) {
            return;
        }
        if self.config.pretty {
            self.sink.write(level, &Pretty(value), message);
        } else {
            self.sink.write(level, value, message);
        }
    }

    severity_fns! {
        trace => Trace,
        debug => Debug,
        info => Info,
        warn => Warn,
        error => Error,
        fatal => Fatal,
    }
}

struct Pretty<'a>(&'a dyn fmt::Debug);

impl fmt::Debug for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#?}", self.0)
    }
}

macro_rules! decorations {
    ($($name:ident => $level:ident),+ $(,)?) => {
        paste! {
            $(
                #[doc = concat!(
                    "Logs the result at [`Level::", stringify!($level), "`]."
                )]
                fn $name(self, logger: &Logger, message: &str) -> Self {
                    self.log(logger, Level::$level, message)
                }

                #[doc = concat!(
                    "Logs the result at [`Level::", stringify!($level),
                    "`] if it is `Ok`."
                )]
                fn [<ok_ $level:lower>](
                    self,
                    logger: &Logger,
                    message: &str,
                ) -> Self {
                    self.log_ok(logger, Level::$level, message)
                }

                #[doc = concat!(
                    "Logs the result at [`Level::", stringify!($level),
                    "`] if it is `Err`."
                )]
                fn [<err_ $level:lower>](
                    self,
                    logger: &Logger,
                    message: &str,
                ) -> Self {
                    self.log_err(logger, Level::$level, message)
                }
            )+
        }
    };
}

/// Side-effecting log calls that return the receiver unchanged.
pub trait LogResult: Sized {
    /// Logs the result at `level`.
    fn log(self, logger: &Logger, level: Level, message: &str) -> Self;

    /// Logs the result at `level` if it is `Ok`.
    fn log_ok(self, logger: &Logger, level: Level, message: &str) -> Self;

    /// Logs the result at `level` if it is `Err`.
    fn log_err(self, logger: &Logger, level: Level, message: &str) -> Self;

    decorations! {
        trace => Trace,
        debug => Debug,
        info => Info,
        warn => Warn,
        log_error => Error,
        fatal => Fatal,
    }
}

impl<T, E> LogResult for Result<T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
{
    fn log(self, logger: &Logger, level: Level, message: &str) -> Self {
        logger.write(level, &self, message);
        self
    }

    fn log_ok(self, logger: &Logger, level: Level, message: &str) -> Self {
        if self.is_ok() {
            logger.write(level, &self, message);
        }
        self
    }

    fn log_err(self, logger: &Logger, level: Level, message: &str) -> Self {
        if self.is_err() {
            logger.write(level, &self, message);
        }
        self
    }
}
