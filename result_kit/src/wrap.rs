//! Adapters that turn a panicking computation into one that returns a
//! [`Result`].
//!
//! ```rust
//! use result_kit::wrap;
//!
//! let parse = wrap(|s: &str| s.parse::<u32>().expect("not a number"));
//!
//! assert_eq!(parse.call(("42",)).unwrap(), 42);
//! assert!(parse.call(("forty-two",)).is_err());
//! ```

use crate::{error::WrappedCallError, result::Result};
use pin_project_lite::pin_project;
use std::{
    any::Any,
    future::Future,
    panic::{self, AssertUnwindSafe},
    pin::Pin,
    task::{Context, Poll},
};

const UNKNOWN_PANIC: &str = "unknown panic";

/// A function that can be called with its arguments packed into a tuple.
///
/// Implemented for every [`Fn`] of up to eight arguments.
pub trait Callable<Args> {
    /// The return type of the function.
    type Output;

    /// Calls the function.
    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($ty:ident),*) => {
        impl<Func, Out, $($ty),*> Callable<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn invoke(&self, ($($ty,)*): ($($ty,)*)) -> Out {
                (self)($($ty),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
impl_callable!(A, B, C, D);
impl_callable!(A, B, C, D, E);
impl_callable!(A, B, C, D, E, F);
impl_callable!(A, B, C, D, E, F, G);
impl_callable!(A, B, C, D, E, F, G, H);

/// Wraps `f` so that each call returns `Ok` with its return value, or `Err`
/// with the panic message if it panics.
pub fn wrap<F>(f: F) -> Wrapped<F> {
    Wrapped { f }
}

/// Wraps an async `f` so that each call resolves to `Ok` with the output of
/// its future, or `Err` with the panic message if either the call or any
/// poll of the future panics.
///
/// Dropping the returned future cancels it; no result is produced.
pub fn wrap_async<F>(f: F) -> WrappedAsync<F> {
    WrappedAsync { f }
}

/// A function wrapped by [`wrap`].
#[derive(Debug, Clone, Copy)]
pub struct Wrapped<F> {
    f: F,
}

impl<F> Wrapped<F> {
    /// Calls the wrapped function with a tuple of arguments.
    pub fn call<Args>(
        &self,
        args: Args,
    ) -> Result<<F as Callable<Args>>::Output, WrappedCallError>
    where
        F: Callable<Args>,
    {
        catch_call(|| self.f.invoke(args))
    }

    /// Returns the unwrapped function.
    pub fn into_inner(self) -> F {
        self.f
    }
}

/// An async function wrapped by [`wrap_async`].
#[derive(Debug, Clone, Copy)]
pub struct WrappedAsync<F> {
    f: F,
}

impl<F> WrappedAsync<F> {
    /// Calls the wrapped function with a tuple of arguments.
    pub fn call<Args, Fut>(&self, args: Args) -> WrapFuture<Fut>
    where
        F: Callable<Args, Output = Fut>,
        Fut: Future,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| self.f.invoke(args))) {
            Ok(inner) => WrapFuture::Running { inner },
            Err(payload) => WrapFuture::Failed {
                error: Some(caught(payload)),
            },
        }
    }

    /// Returns the unwrapped function.
    pub fn into_inner(self) -> F {
        self.f
    }
}

pin_project! {
    /// The future returned by [`WrappedAsync::call`].
    #[project = WrapFutureProj]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub enum WrapFuture<Fut> {
        Running { #[pin] inner: Fut },
        Failed { error: Option<WrappedCallError> },
    }
}

impl<Fut> Future for WrapFuture<Fut>
where
    Fut: Future,
{
    type Output = Result<Fut::Output, WrappedCallError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            WrapFutureProj::Running { inner } => {
                match panic::catch_unwind(AssertUnwindSafe(|| inner.poll(cx))) {
                    Ok(Poll::Pending) => Poll::Pending,
                    Ok(Poll::Ready(value)) => Poll::Ready(Result::Ok(value)),
                    Err(payload) => Poll::Ready(Result::Err(caught(payload))),
                }
            }
            WrapFutureProj::Failed { error } => match error.take() {
                Some(error) => Poll::Ready(Result::Err(error)),
                None => panic!("`WrapFuture` polled after completion"),
            },
        }
    }
}

pub(crate) fn catch_call<T>(
    f: impl FnOnce() -> T,
) -> Result<T, WrappedCallError> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Result::Ok(value),
        Err(payload) => Result::Err(caught(payload)),
    }
}

fn caught(payload: Box<dyn Any + Send>) -> WrappedCallError {
    let error = WrappedCallError::new(panic_message(payload));
    tracing::debug!(error = %error, "wrapped call panicked");
    error
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast_ref::<&'static str>() {
            Some(message) => (*message).to_owned(),
            None => UNKNOWN_PANIC.to_owned(),
        },
    }
}
