//! The outcome of a computation: either [`Ok`](Result::Ok) holding a value,
//! or [`Err`](Result::Err) holding an error.

use crate::{
    error::{
        panic_with, ResultUnwrapError, ReverseUnwrapError, WrappedCallError,
        RESULT_UNWRAP_ERR, RESULT_UNWRAP_ERR_ON_OK,
    },
    option::Option,
    wrap::catch_call,
};
use core::result::Result as StdResult;
use serde::{ser::SerializeStruct, Serialize, Serializer};
use std::fmt::Debug;

/// Success (`Ok`) or failure (`Err`).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Result<T, E> {
    /// Holds the success value.
    Ok(T),
    /// Holds the error value.
    Err(E),
}

/// Creates `Result::Ok(value)`.
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Creates `Result::Err(error)`.
pub fn err<T, E>(error: E) -> Result<T, E> {
    Result::Err(error)
}

impl<T> Result<T, WrappedCallError> {
    /// Runs `f` once, turning a panic into `Err` with the panic message.
    ///
    /// ```rust
    /// use result_kit::Result;
    ///
    /// let res = Result::call(|| -> u8 { panic!("boom") });
    /// assert!(res.is_err_and(|e| e.message() == "boom"));
    /// ```
    pub fn call(f: impl FnOnce() -> T) -> Self {
        catch_call(f)
    }
}

impl<T, E> Result<T, E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if the result is `Ok` and the value matches `predicate`.
    pub fn is_ok_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Ok(v) => predicate(v),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the result is `Err` and the error matches
    /// `predicate`.
    pub fn is_err_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Err(e) => predicate(e),
        }
    }

    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => Result::Err(e),
        }
    }

    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => Result::Err(e),
        }
    }

    /// Returns the contained `Ok` value.
    ///
    /// ## Panics
    ///
    /// Panics with a [`ResultUnwrapError`] message naming the error if the
    /// result is `Err`. The panic carries only the message; use
    /// [`try_unwrap`](Self::try_unwrap) to get the error value back.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => {
                panic_with(ResultUnwrapError::new(RESULT_UNWRAP_ERR, e))
            }
        }
    }

    /// Returns the contained `Ok` value, or a [`ResultUnwrapError`] owning
    /// the error.
    pub fn try_unwrap(self) -> StdResult<T, ResultUnwrapError<E>> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(ResultUnwrapError::new(RESULT_UNWRAP_ERR, e)),
        }
    }

    /// Returns the contained `Err` value.
    ///
    /// ## Panics
    ///
    /// Panics with a [`ReverseUnwrapError`] message naming the value if the
    /// result is `Ok`. Use [`try_unwrap_err`](Self::try_unwrap_err) to get
    /// the value back instead.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Self::Ok(v) => {
                panic_with(ReverseUnwrapError::new(RESULT_UNWRAP_ERR_ON_OK, v))
            }
            Self::Err(e) => e,
        }
    }

    /// Returns the contained `Err` value, or a [`ReverseUnwrapError`]
    /// owning the success value.
    pub fn try_unwrap_err(self) -> StdResult<E, ReverseUnwrapError<T>> {
        match self {
            Self::Ok(v) => {
                Err(ReverseUnwrapError::new(RESULT_UNWRAP_ERR_ON_OK, v))
            }
            Self::Err(e) => Ok(e),
        }
    }

    /// Returns the contained `Ok` value.
    ///
    /// ## Panics
    ///
    /// Panics with `reason`, followed by the error, if the result is `Err`.
    /// Use [`try_expect`](Self::try_expect) to recover the error value.
    #[track_caller]
    pub fn expect(self, reason: &str) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => {
                panic_with(ResultUnwrapError::new(reason.to_owned(), e))
            }
        }
    }

    pub fn try_expect(
        self,
        reason: &str,
    ) -> StdResult<T, ResultUnwrapError<E>> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(ResultUnwrapError::new(reason.to_owned(), e)),
        }
    }

    /// Returns the contained `Err` value.
    ///
    /// ## Panics
    ///
    /// Panics with `reason`, followed by the value, if the result is `Ok`.
    /// Use [`try_expect_err`](Self::try_expect_err) to recover the value.
    #[track_caller]
    pub fn expect_err(self, reason: &str) -> E
    where
        T: Debug,
    {
        match self {
            Self::Ok(v) => {
                panic_with(ReverseUnwrapError::new(reason.to_owned(), v))
            }
            Self::Err(e) => e,
        }
    }

    pub fn try_expect_err(
        self,
        reason: &str,
    ) -> StdResult<E, ReverseUnwrapError<T>> {
        match self {
            Self::Ok(v) => Err(ReverseUnwrapError::new(reason.to_owned(), v)),
            Self::Err(e) => Ok(e),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => default,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => f(e),
        }
    }

    /// Calls `on_ok` with the value or `on_err` with the error. The two
    /// functions share a return type.
    pub fn match_with<U>(
        self,
        on_ok: impl FnOnce(T) -> U,
        on_err: impl FnOnce(E) -> U,
    ) -> U {
        match self {
            Self::Ok(v) => on_ok(v),
            Self::Err(e) => on_err(e),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            Self::Ok(v) => Result::Ok(f(v)),
            Self::Err(e) => Result::Err(e),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => Result::Err(f(e)),
        }
    }

    pub fn map_or<U>(self, f: impl FnOnce(T) -> U, default: U) -> U {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(_) => default,
        }
    }

    pub fn map_or_else<U>(
        self,
        on_ok: impl FnOnce(T) -> U,
        on_err: impl FnOnce(E) -> U,
    ) -> U {
        match self {
            Self::Ok(v) => on_ok(v),
            Self::Err(e) => on_err(e),
        }
    }

    /// Calls `f` with a reference to the `Ok` value, then returns the
    /// result unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Ok(v) = &self {
            f(v);
        }
        self
    }

    /// Calls `f` with a reference to the `Err` value, then returns the
    /// result unchanged.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Self::Err(e) = &self {
            f(e);
        }
        self
    }

    /// Converts into an option of the success value, discarding the error.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(v) => Option::Some(v),
            Self::Err(_) => Option::None,
        }
    }

    /// Converts into an option of the error, discarding the success value.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Err(e) => Option::Some(e),
        }
    }

    /// Returns `other` if the result is `Ok`, otherwise the `Err` of `self`.
    ///
    /// `other` is evaluated by the caller before this is called; use
    /// [`and_then`](Self::and_then) to defer it.
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(e) => Result::Err(e),
        }
    }

    pub fn and_then<U>(
        self,
        f: impl FnOnce(T) -> Result<U, E>,
    ) -> Result<U, E> {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(e) => Result::Err(e),
        }
    }

    /// Returns `other` if the result is `Err`, otherwise the `Ok` of `self`.
    ///
    /// `other` is evaluated by the caller before this is called; use
    /// [`or_else`](Self::or_else) to defer it.
    pub fn or<F>(self, other: Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(_) => other,
        }
    }

    pub fn or_else<F>(
        self,
        f: impl FnOnce(E) -> Result<T, F>,
    ) -> Result<T, F> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => f(e),
        }
    }

    /// Converts into the standard library result.
    pub fn into_std(self) -> StdResult<T, E> {
        self.into()
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(value: StdResult<T, E>) -> Self {
        match value {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(v) => Ok(v),
            Result::Err(e) => Err(e),
        }
    }
}

impl<T, E> Serialize for Result<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Result", 2)?;
        match self {
            Self::Ok(v) => {
                state.serialize_field("type", "ResultOk")?;
                state.serialize_field("value", v)?;
            }
            Self::Err(e) => {
                state.serialize_field("type", "ResultError")?;
                state.serialize_field("error", e)?;
            }
        }
        state.end()
    }
}
