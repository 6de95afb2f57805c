use crate::HttpErrorName;
use paste::paste;
use serde::{ser::SerializeStruct, Serialize, Serializer};
use serde_json::Value;
use std::{error::Error, fmt, sync::Arc};
use typed_builder::TypedBuilder;

/// A shared, type-erased cause.
pub type Cause = Arc<dyn Error + Send + Sync>;

/// The pieces of an [`HttpError`] other than its name and code.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct HttpErrInput {
    #[builder(setter(into))]
    pub message: String,
    /// Extra payload sent along with the message.
    #[builder(default, setter(strip_option))]
    pub data: Option<Value>,
    #[builder(default, setter(strip_option))]
    pub cause: Option<Cause>,
}

impl From<&str> for HttpErrInput {
    fn from(message: &str) -> Self {
        Self::builder().message(message).build()
    }
}

impl From<String> for HttpErrInput {
    fn from(message: String) -> Self {
        Self::builder().message(message).build()
    }
}

/// An error carrying an HTTP status.
///
/// Serializes as `{ "message", "code", "data" }`; the name and cause are
/// not part of the wire form.
#[derive(Debug, Clone)]
pub struct HttpError {
    name: HttpErrorName,
    code: u16,
    message: String,
    data: Option<Value>,
    cause: Option<Cause>,
}

impl HttpError {
    /// Builds an error from its parts. `code` is kept as given, even when it
    /// differs from `name.code()`.
    pub fn new(
        name: HttpErrorName,
        code: u16,
        input: impl Into<HttpErrInput>,
    ) -> Self {
        let HttpErrInput {
            message,
            data,
            cause,
        } = input.into();
        Self {
            name,
            code,
            message,
            data,
            cause,
        }
    }

    /// Builds an error whose code is the one registered for `name`.
    pub fn from_name(
        name: HttpErrorName,
        input: impl Into<HttpErrInput>,
    ) -> Self {
        Self::new(name, name.code(), input)
    }

    pub fn name(&self) -> HttpErrorName {
        self.name
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// The error this one was raised because of, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_cause(
        mut self,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }
}

macro_rules! constructors {
    ($($name:ident),+ $(,)?) => {
        paste! {
            impl HttpError {
                $(
                    #[doc = concat!("A `", stringify!($name), "` error.")]
                    pub fn [<$name:snake>](
                        input: impl Into<HttpErrInput>,
                    ) -> Self {
                        Self::from_name(HttpErrorName::$name, input)
                    }
                )+
            }
        }
    };
}

constructors! {
    BadRequest,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    ProxyAuthenticationRequired,
    RequestTimeout,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    PayloadTooLarge,
    UriTooLong,
    UnsupportedMediaType,
    RangeNotSatisfiable,
    ExpectationFailed,
    ImaTeapot,
    MisdirectedRequest,
    UnprocessableEntity,
    Locked,
    FailedDependency,
    TooEarly,
    UpgradeRequired,
    PreconditionRequired,
    TooManyRequests,
    RequestHeaderFieldsTooLarge,
    UnavailableForLegalReasons,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    HttpVersionNotSupported,
    VariantAlsoNegotiates,
    InsufficientStorage,
    LoopDetected,
    BandwidthLimitExceeded,
    NotExtended,
    NetworkAuthenticationRequired,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for HttpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

impl Serialize for HttpError {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HttpError", 3)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

/// Whether `e` is itself an [`HttpError`].
pub fn is_http_error(e: &(dyn Error + 'static)) -> bool {
    e.is::<HttpError>()
}

/// The first [`HttpError`] in the source chain of `e`, not counting `e`
/// itself.
pub fn caused_by_http_error<'a>(
    e: &'a (dyn Error + 'static),
) -> Option<&'a HttpError> {
    let mut source = e.source();
    while let Some(err) = source {
        if let Some(http) = err.downcast_ref::<HttpError>() {
            return Some(http);
        }
        source = err.source();
    }
    None
}

pub fn is_http_error_cause(e: &(dyn Error + 'static)) -> bool {
    caused_by_http_error(e).is_some()
}
