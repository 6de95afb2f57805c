use http_errors::{
    caused_by_http_error, is_http_error, is_http_error_cause, HttpErrInput,
    HttpError, HttpErrorName,
};
use result_kit::{err, ok, Result};
use serde_json::json;
use std::{error::Error, fmt};

type HttpResult<T> = Result<T, HttpError>;

fn find_user(id: u32) -> HttpResult<String> {
    if id == 1 {
        return ok("admin".into());
    }
    err(HttpError::not_found(
        HttpErrInput::builder()
            .message("user not found")
            .data(json!({ "id": id }))
            .build(),
    ))
}

#[derive(Debug)]
struct RequestFailed {
    source: HttpError,
}

impl fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("request failed")
    }
}

impl Error for RequestFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug)]
struct Handler {
    source: RequestFailed,
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("handler failed")
    }
}

impl Error for Handler {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn http_error_as_result_error() {
    assert_eq!(find_user(1).unwrap(), "admin");

    let e = find_user(7).try_unwrap().unwrap_err().into_cause();
    assert!(is_http_error(&e));
    assert_eq!(e.name(), HttpErrorName::NotFound);
    assert_eq!(
        serde_json::to_value(&e).unwrap(),
        json!({ "message": "user not found", "code": 404, "data": { "id": 7 } })
    );
}

#[test]
fn recognizes_http_error_anywhere_in_source_chain() {
    let e = find_user(7).unwrap_err();
    let direct = RequestFailed { source: e.clone() };
    let nested = Handler { source: direct };

    assert!(!is_http_error(&nested));
    assert!(is_http_error_cause(&nested));
    assert!(is_http_error_cause(&nested.source));
    assert_eq!(caused_by_http_error(&nested).unwrap().code(), 404);

    assert!(is_http_error(&e));
    assert!(!is_http_error_cause(&e));
}

#[test]
fn unrelated_errors_are_not_http_errors() {
    let io = std::io::Error::other("closed");
    assert!(!is_http_error(&io));
    assert!(!is_http_error_cause(&io));
    assert!(caused_by_http_error(&io).is_none());
}

#[test]
fn every_name_has_a_constructor_code() {
    let e = HttpError::from_name(HttpErrorName::TooManyRequests, "slow down");
    assert_eq!(e.code(), 429);
    assert_eq!(e.name().status(), http::StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(e.message(), "slow down");
    assert!(e.data().is_none());

    let e = HttpError::unprocessable_entity("bad field")
        .with_data(json!(["email"]));
    assert_eq!(e.data(), Some(&json!(["email"])));
}
