#![forbid(unsafe_code)]

//! Named HTTP errors for the error side of a result.
//!
//! ```rust
//! use http_errors::{caused_by_http_error, HttpErrInput, HttpError};
//! use serde_json::json;
//!
//! let e = HttpError::not_found(
//!     HttpErrInput::builder()
//!         .message("user not found")
//!         .data(json!({ "id": 42 }))
//!         .build(),
//! );
//! assert_eq!(e.code(), 404);
//! assert_eq!(
//!     serde_json::to_value(&e).unwrap(),
//!     json!({ "message": "user not found", "code": 404, "data": { "id": 42 } })
//! );
//!
//! let wrapped = HttpError::bad_gateway("upstream failed").with_cause(e);
//! assert_eq!(caused_by_http_error(&wrapped).unwrap().code(), 404);
//! ```

mod error;
mod name;

pub use error::{
    caused_by_http_error, is_http_error, is_http_error_cause, Cause,
    HttpErrInput, HttpError,
};
pub use name::HttpErrorName;
