//! An optional value: either [`Some`](Option::Some) holding a value, or
//! [`None`](Option::None).
//!
//! The variants share their names with the prelude's `Some` and `None`, so
//! inside this crate they are always written with their type path.

use crate::{
    error::{panic_with, EmptyOptionError},
    result::Result,
};
use core::result::Result as StdResult;
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Presence (`Some`) or absence (`None`) of a value.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Option<T> {
    /// Holds a value.
    Some(T),
    /// Holds nothing.
    #[default]
    None,
}

/// Creates `Option::Some(value)`.
pub fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// Creates `Option::None`.
pub fn none<T>() -> Option<T> {
    Option::None
}

impl<T> Option<T> {
    /// Returns `true` if the option holds a value.
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if the option is empty.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if the option holds a value matching `predicate`.
    ///
    /// The predicate is not called on `None`.
    pub fn is_some_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Some(v) => predicate(v),
            Self::None => false,
        }
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(v) => Option::Some(v),
            Self::None => Option::None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Some(v) => Option::Some(v),
            Self::None => Option::None,
        }
    }

    /// Returns the contained value.
    ///
    /// ## Panics
    ///
    /// Panics with an [`EmptyOptionError`] message if the option is `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => panic_with(EmptyOptionError::default()),
        }
    }

    /// Returns the contained value, or an [`EmptyOptionError`] if there is
    /// none.
    pub fn try_unwrap(self) -> StdResult<T, EmptyOptionError> {
        match self {
            Self::Some(v) => Ok(v),
            Self::None => Err(EmptyOptionError::default()),
        }
    }

    /// Returns the contained value.
    ///
    /// ## Panics
    ///
    /// Panics with `reason` as the message if the option is `None`.
    #[track_caller]
    pub fn expect(self, reason: &str) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => panic_with(EmptyOptionError::new(reason.to_owned())),
        }
    }

    /// Like [`expect`](Self::expect), but returns the error instead of
    /// panicking.
    pub fn try_expect(self, reason: &str) -> StdResult<T, EmptyOptionError> {
        match self {
            Self::Some(v) => Ok(v),
            Self::None => Err(EmptyOptionError::new(reason.to_owned())),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => default,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => f(),
        }
    }

    /// Calls `on_some` with the contained value, or `on_none` if there is
    /// none. Only one of the two functions is called.
    pub fn match_with<U>(
        self,
        on_some: impl FnOnce(T) -> U,
        on_none: impl FnOnce() -> U,
    ) -> U {
        match self {
            Self::Some(v) => on_some(v),
            Self::None => on_none(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
        match self {
            Self::Some(v) => Option::Some(f(v)),
            Self::None => Option::None,
        }
    }

    pub fn map_or<U>(self, f: impl FnOnce(T) -> U, default: U) -> U {
        match self {
            Self::Some(v) => f(v),
            Self::None => default,
        }
    }

    pub fn map_or_else<U>(
        self,
        on_some: impl FnOnce(T) -> U,
        on_none: impl FnOnce() -> U,
    ) -> U {
        match self {
            Self::Some(v) => on_some(v),
            Self::None => on_none(),
        }
    }

    /// Transforms `Some(v)` into `Ok(v)` and `None` into `Err(err)`.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Self::Some(v) => Result::Ok(v),
            Self::None => Result::Err(err),
        }
    }

    /// Transforms `Some(v)` into `Ok(v)` and `None` into `Err(f())`.
    pub fn ok_or_else<E>(self, f: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Self::Some(v) => Result::Ok(v),
            Self::None => Result::Err(f()),
        }
    }

    /// Calls `f` with a reference to the contained value, then returns the
    /// option unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Some(v) = &self {
            f(v);
        }
        self
    }

    /// Returns `None` if the option is `None`, otherwise returns `other`.
    ///
    /// `other` is evaluated by the caller before this is called; use
    /// [`and_then`](Self::and_then) to defer it.
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Option::None,
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
        match self {
            Self::Some(v) => f(v),
            Self::None => Option::None,
        }
    }

    /// Returns the option if it holds a value, otherwise returns `other`.
    ///
    /// `other` is evaluated by the caller before this is called; use
    /// [`or_else`](Self::or_else) to defer it.
    pub fn or(self, other: Option<T>) -> Option<T> {
        match self {
            Self::Some(v) => Self::Some(v),
            Self::None => other,
        }
    }

    pub fn or_else(self, f: impl FnOnce() -> Option<T>) -> Option<T> {
        match self {
            Self::Some(v) => Self::Some(v),
            Self::None => f(),
        }
    }

    /// Returns `Some` if exactly one of `self` and `other` is `Some`,
    /// otherwise `None`.
    pub fn xor(self, other: Option<T>) -> Option<T> {
        match (self, other) {
            (Self::Some(v), Self::None) | (Self::None, Self::Some(v)) => {
                Self::Some(v)
            }
            _ => Self::None,
        }
    }

    /// Keeps the value only if it matches `predicate`.
    ///
    /// The predicate is not called on `None`.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Some(v) => {
                if predicate(&v) {
                    Self::Some(v)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Converts into the standard library option.
    pub fn into_std(self) -> core::option::Option<T> {
        self.into()
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Option<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Option::None,
        }
    }
}

impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(value: core::option::Option<T>) -> Self {
        match value {
            Some(v) => Self::Some(v),
            None => Self::None,
        }
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Option::Some(v) => Some(v),
            Option::None => None,
        }
    }
}

impl<T> Serialize for Option<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Some(v) => {
                let mut state = serializer.serialize_struct("Option", 2)?;
                state.serialize_field("type", "Some")?;
                state.serialize_field("value", v)?;
                state.end()
            }
            Self::None => {
                let mut state = serializer.serialize_struct("Option", 1)?;
                state.serialize_field("type", "None")?;
                state.end()
            }
        }
    }
}
