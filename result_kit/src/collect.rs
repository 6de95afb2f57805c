use crate::result::Result;

/// Collects the values of a sequence of results.
///
/// Returns `Ok` with every value, in order, if all of them are `Ok`.
/// Otherwise returns the first `Err`; results after it are never pulled from
/// the iterator.
///
/// ```rust
/// use result_kit::{all, err, ok};
///
/// assert_eq!(all([ok(1), ok(2), ok(3)]), ok::<_, &str>(vec![1, 2, 3]));
/// assert_eq!(all([ok(1), err("x"), ok(3)]), err("x"));
/// ```
pub fn all<T, E>(
    results: impl IntoIterator<Item = Result<T, E>>,
) -> Result<Vec<T>, E> {
    let mut values = Vec::new();
    for res in results {
        match res {
            Result::Ok(v) => values.push(v),
            Result::Err(e) => return Result::Err(e),
        }
    }
    Result::Ok(values)
}

/// Returns the first `Ok` of a sequence of results.
///
/// Results after it are never pulled from the iterator. If every result is
/// an `Err`, returns `Err` with all of the errors, in order.
///
/// ```rust
/// use result_kit::{any, err, ok};
///
/// assert_eq!(any([err("a"), ok(2), err("c")]), ok(2));
/// assert_eq!(any([err::<u8, _>("a"), err("b")]), err(vec!["a", "b"]));
/// ```
pub fn any<T, E>(
    results: impl IntoIterator<Item = Result<T, E>>,
) -> Result<T, Vec<E>> {
    let mut errors = Vec::new();
    for res in results {
        match res {
            Result::Ok(v) => return Result::Ok(v),
            Result::Err(e) => errors.push(e),
        }
    }
    Result::Err(errors)
}

/// Calls [`all`](crate::all) with a list of results.
///
/// ```rust
/// use result_kit::{err, ok};
///
/// assert_eq!(result_kit::all!(ok(1), ok(2)), ok::<_, ()>(vec![1, 2]));
/// ```
#[macro_export]
macro_rules! all {
    ($($res:expr),* $(,)?) => {
        $crate::all([$($res),*])
    };
}

/// Calls [`any`](crate::any) with a list of results.
///
/// ```rust
/// use result_kit::{err, ok};
///
/// assert_eq!(
///     result_kit::any!(err::<u8, _>("x"), err("y")),
///     err(vec!["x", "y"])
/// );
/// ```
#[macro_export]
macro_rules! any {
    ($($res:expr),* $(,)?) => {
        $crate::any([$($res),*])
    };
}
