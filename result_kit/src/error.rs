//! Errors raised when a value is extracted from the wrong variant, and the
//! error captured when a wrapped call fails.

use std::{borrow::Cow, fmt::Display};
use thiserror::Error;

pub(crate) const OPTION_UNWRAP_NONE: &str =
    "called `Option::unwrap()` on a `None` value";
pub(crate) const RESULT_UNWRAP_ERR: &str =
    "called `Result::unwrap()` on an `Err` value";
pub(crate) const RESULT_UNWRAP_ERR_ON_OK: &str =
    "called `Result::unwrap_err()` on an `Ok` value";

/// Raised by [`Option::unwrap`](crate::Option::unwrap) and
/// [`Option::expect`](crate::Option::expect) on `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct EmptyOptionError {
    reason: Cow<'static, str>,
}

impl EmptyOptionError {
    pub(crate) fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The message this error was raised with.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Default for EmptyOptionError {
    fn default() -> Self {
        Self::new(OPTION_UNWRAP_NONE)
    }
}

/// Raised by [`Result::unwrap`](crate::Result::unwrap) and
/// [`Result::expect`](crate::Result::expect) on `Err`.
///
/// Owns the original error value as its cause.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}: {cause:?}")]
pub struct ResultUnwrapError<E> {
    reason: Cow<'static, str>,
    cause: E,
}

impl<E> ResultUnwrapError<E> {
    pub(crate) fn new(reason: impl Into<Cow<'static, str>>, cause: E) -> Self {
        Self {
            reason: reason.into(),
            cause,
        }
    }

    /// The message this error was raised with.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The error held by the `Err` that was unwrapped.
    pub fn cause(&self) -> &E {
        &self.cause
    }

    /// Consumes the error, returning the original error value.
    pub fn into_cause(self) -> E {
        self.cause
    }
}

/// Raised by [`Result::unwrap_err`](crate::Result::unwrap_err) and
/// [`Result::expect_err`](crate::Result::expect_err) on `Ok`.
///
/// Owns the original success value as its cause.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}: {cause:?}")]
pub struct ReverseUnwrapError<T> {
    reason: Cow<'static, str>,
    cause: T,
}

impl<T> ReverseUnwrapError<T> {
    pub(crate) fn new(reason: impl Into<Cow<'static, str>>, cause: T) -> Self {
        Self {
            reason: reason.into(),
            cause,
        }
    }

    /// The message this error was raised with.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The value held by the `Ok` that was unwrapped.
    pub fn cause(&self) -> &T {
        &self.cause
    }

    /// Consumes the error, returning the original success value.
    pub fn into_cause(self) -> T {
        self.cause
    }
}

/// The failure captured by [`wrap`](crate::wrap),
/// [`wrap_async`](crate::wrap_async) and [`Result::call`](crate::Result::call).
///
/// Only the message of the panic is kept.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct WrappedCallError {
    message: String,
}

impl WrappedCallError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message of the captured failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl PartialEq<str> for WrappedCallError {
    fn eq(&self, other: &str) -> bool {
        self.message == other
    }
}

impl PartialEq<&str> for WrappedCallError {
    fn eq(&self, other: &&str) -> bool {
        self.message == *other
    }
}

/// Panics with the `Display` of `err`. The payload is the formatted
/// `String`, not the error value.
#[track_caller]
pub(crate) fn panic_with(err: impl Display) -> ! {
    panic!("{err}")
}
