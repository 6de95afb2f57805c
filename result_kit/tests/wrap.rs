use result_kit::{prelude::*, wrap, wrap_async, WrappedCallError};
use std::time::Duration;

fn test_fn(should_panic: bool) -> &'static str {
    if should_panic {
        panic!("Error");
    }
    "test_fn"
}

#[test]
fn wrap_returns_ok_with_return_value() {
    let wrapped = wrap(test_fn);
    let result = wrapped.call((false,));

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "test_fn");
}

#[test]
fn wrap_returns_err_with_panic_message() {
    let wrapped = wrap(test_fn);
    let result = wrapped.call((true,));

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().message(), "Error");
}

#[test]
fn wrap_extracts_formatted_messages() {
    let wrapped = wrap(|a: i32, b: i32| {
        if b == 0 {
            panic!("cannot divide {a} by zero");
        }
        a / b
    });

    assert_eq!(wrapped.call((6, 3)), Ok(2));

    let e: WrappedCallError = wrapped.call((6, 0)).unwrap_err();
    assert_eq!(e.to_string(), "cannot divide 6 by zero");
    assert_eq!(e.into_message(), "cannot divide 6 by zero");
}

#[test]
fn wrap_catches_unwrap_failures() {
    let wrapped = wrap(|| err::<u8, _>("disk full").unwrap());

    let e = wrapped.call(()).unwrap_err();
    assert_eq!(
        e,
        "called `Result::unwrap()` on an `Err` value: \"disk full\""
    );
}

#[test]
fn wrapped_function_is_reusable() {
    let wrapped = wrap(|s: &str| s.parse::<u32>().expect("not a number"));

    assert_eq!(wrapped.call(("1",)), Ok(1));
    assert!(wrapped.call(("x",)).is_err());
    assert_eq!(wrapped.call(("2",)), Ok(2));
}

#[test]
fn scenario_wrap_throwing_closure() {
    let res = wrap(|| -> u8 { panic!("fail") }).call(());
    assert!(res.is_err());
    assert_eq!(res.unwrap_err(), "fail");
}

async fn async_test_fn(should_reject: bool) -> &'static str {
    tokio::time::sleep(Duration::from_millis(1)).await;
    if should_reject {
        panic!("nope");
    }
    "success"
}

#[tokio::test]
async fn wrap_async_resolves_ok() {
    let wrapped = wrap_async(async_test_fn);
    let result = wrapped.call((false,)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");
}

#[tokio::test]
async fn wrap_async_turns_panic_while_polling_into_err() {
    let wrapped = wrap_async(async_test_fn);
    let result = wrapped.call((true,)).await;

    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), "nope");
}

#[tokio::test]
async fn wrap_async_turns_panic_before_future_into_err() {
    let wrapped = wrap_async(|n: u8| {
        if n == 0 {
            panic!("zero is not allowed");
        }
        async move { n * 2 }
    });

    assert_eq!(wrapped.call((2,)).await, Ok(4));
    assert_eq!(wrapped.call((0,)).await.unwrap_err(), "zero is not allowed");
}
