#![forbid(unsafe_code)]

//! [`Option`] and [`Result`] sum types with a full combinator algebra.
//!
//! Both types mirror the standard library's, convert to and from them
//! losslessly, and add a few things on top:
//! - non-panicking `try_*` extraction that hands back the offending payload
//!   as a typed cause,
//! - [`wrap`] and [`wrap_async`], which turn a panicking function into one
//!   that returns a [`Result`],
//! - [`all`] and [`any`] over sequences of results,
//! - level-gated logging of results through an injected [`log::Logger`].
//!
//! ```rust
//! use result_kit::prelude::*;
//!
//! let len = ok::<_, String>("user-42").map(|s| s.len());
//! assert_eq!(len, Ok(7));
//!
//! let fallback = none().or_else(|| some("fallback"));
//! assert_eq!(fallback, Some("fallback"));
//!
//! assert_eq!(some(5).filter(|x| *x > 10), None);
//! ```

mod collect;
mod error;
pub mod log;
mod option;
mod result;
mod wrap;

pub use collect::{all, any};
pub use error::{
    EmptyOptionError, ResultUnwrapError, ReverseUnwrapError, WrappedCallError,
};
pub use option::{none, some, Option};
pub use result::{err, ok, Result};
pub use wrap::{wrap, wrap_async, Callable, WrapFuture, Wrapped, WrappedAsync};

/// Reexports the types, their variants and the constructors.
///
/// Glob-importing this shadows the standard prelude's `Option`, `Result`,
/// `Some`, `None`, `Ok` and `Err`.
pub mod prelude {
    pub use crate::{
        err,
        log::LogResult,
        none, ok, some,
        Option::{self, None, Some},
        Result::{self, Err, Ok},
    };
}
