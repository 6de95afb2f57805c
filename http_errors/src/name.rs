use http::StatusCode;
use std::fmt;

macro_rules! http_error_names {
    ($($name:ident = $code:literal, $label:literal, $reason:literal;)+) => {
        /// The name of an HTTP client or server error.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HttpErrorName {
            $(
                #[doc = concat!("`", stringify!($code), " ", $reason, "`")]
                $name,
            )+
        }

        impl HttpErrorName {
            /// Every name, ordered by status code.
            pub const ALL: &'static [HttpErrorName] =
                &[$(HttpErrorName::$name),+];

            pub const fn code(self) -> u16 {
                match self {
                    $(HttpErrorName::$name => $code,)+
                }
            }

            /// The bare name, e.g. `NotFound` or `URITooLong`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(HttpErrorName::$name => $label,)+
                }
            }

            /// The canonical reason phrase, e.g. `Not Found`.
            pub const fn reason(self) -> &'static str {
                match self {
                    $(HttpErrorName::$name => $reason,)+
                }
            }

            pub const fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(HttpErrorName::$name),)+
                    _ => None,
                }
            }
        }
    };
}

http_error_names! {
    BadRequest = 400, "BadRequest", "Bad Request";
    Unauthorized = 401, "Unauthorized", "Unauthorized";
    PaymentRequired = 402, "PaymentRequired", "Payment Required";
    Forbidden = 403, "Forbidden", "Forbidden";
    NotFound = 404, "NotFound", "Not Found";
    MethodNotAllowed = 405, "MethodNotAllowed", "Method Not Allowed";
    NotAcceptable = 406, "NotAcceptable", "Not Acceptable";
    ProxyAuthenticationRequired = 407, "ProxyAuthenticationRequired",
        "Proxy Authentication Required";
    RequestTimeout = 408, "RequestTimeout", "Request Timeout";
    Conflict = 409, "Conflict", "Conflict";
    Gone = 410, "Gone", "Gone";
    LengthRequired = 411, "LengthRequired", "Length Required";
    PreconditionFailed = 412, "PreconditionFailed", "Precondition Failed";
    PayloadTooLarge = 413, "PayloadTooLarge", "Payload Too Large";
    UriTooLong = 414, "URITooLong", "URI Too Long";
    UnsupportedMediaType = 415, "UnsupportedMediaType",
        "Unsupported Media Type";
    RangeNotSatisfiable = 416, "RangeNotSatisfiable", "Range Not Satisfiable";
    ExpectationFailed = 417, "ExpectationFailed", "Expectation Failed";
    ImaTeapot = 418, "ImaTeapot", "I'm a Teapot";
    MisdirectedRequest = 421, "MisdirectedRequest", "Misdirected Request";
    UnprocessableEntity = 422, "UnprocessableEntity", "Unprocessable Entity";
    Locked = 423, "Locked", "Locked";
    FailedDependency = 424, "FailedDependency", "Failed Dependency";
    TooEarly = 425, "TooEarly", "Too Early";
    UpgradeRequired = 426, "UpgradeRequired", "Upgrade Required";
    PreconditionRequired = 428, "PreconditionRequired",
        "Precondition Required";
    TooManyRequests = 429, "TooManyRequests", "Too Many Requests";
    RequestHeaderFieldsTooLarge = 431, "RequestHeaderFieldsTooLarge",
        "Request Header Fields Too Large";
    UnavailableForLegalReasons = 451, "UnavailableForLegalReasons",
        "Unavailable For Legal Reasons";
    InternalServerError = 500, "InternalServerError", "Internal Server Error";
    NotImplemented = 501, "NotImplemented", "Not Implemented";
    BadGateway = 502, "BadGateway", "Bad Gateway";
    ServiceUnavailable = 503, "ServiceUnavailable", "Service Unavailable";
    GatewayTimeout = 504, "GatewayTimeout", "Gateway Timeout";
    HttpVersionNotSupported = 505, "HTTPVersionNotSupported",
        "HTTP Version Not Supported";
    VariantAlsoNegotiates = 506, "VariantAlsoNegotiates",
        "Variant Also Negotiates";
    InsufficientStorage = 507, "InsufficientStorage", "Insufficient Storage";
    LoopDetected = 508, "LoopDetected", "Loop Detected";
    BandwidthLimitExceeded = 509, "BandwidthLimitExceeded",
        "Bandwidth Limit Exceeded";
    NotExtended = 510, "NotExtended", "Not Extended";
    NetworkAuthenticationRequired = 511, "NetworkAuthenticationRequired",
        "Network Authentication Required";
}

impl HttpErrorName {
    /// The status code as an [`http::StatusCode`].
    pub fn status(self) -> StatusCode {
        // every code in the table is within 400..=599
        StatusCode::from_u16(self.code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn is_client_error(self) -> bool {
        self.status().is_client_error()
    }

    pub fn is_server_error(self) -> bool {
        self.status().is_server_error()
    }
}

impl fmt::Display for HttpErrorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<StatusCode> for HttpErrorName {
    type Error = StatusCode;

    fn try_from(status: StatusCode) -> Result<Self, StatusCode> {
        HttpErrorName::from_code(status.as_u16()).ok_or(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_consistent() {
        for name in HttpErrorName::ALL {
            assert_eq!(HttpErrorName::from_code(name.code()), Some(*name));
            assert_eq!(name.status().as_u16(), name.code());
            assert_eq!(
                name.as_str(),
                name.reason().replace(|c: char| !c.is_alphanumeric(), "")
            );
        }
        assert_eq!(HttpErrorName::ALL.len(), 41);
    }

    #[test]
    fn names_and_reasons() {
        assert_eq!(HttpErrorName::NotFound.to_string(), "NotFound");
        assert_eq!(HttpErrorName::UriTooLong.to_string(), "URITooLong");
        assert_eq!(HttpErrorName::ImaTeapot.code(), 418);
        assert_eq!(HttpErrorName::ImaTeapot.reason(), "I'm a Teapot");
        assert_eq!(HttpErrorName::from_code(420), None);
        assert_eq!(HttpErrorName::from_code(200), None);
    }

    #[test]
    fn status_classes() {
        assert!(HttpErrorName::Gone.is_client_error());
        assert!(!HttpErrorName::Gone.is_server_error());
        assert!(HttpErrorName::BandwidthLimitExceeded.is_server_error());
        assert_eq!(
            HttpErrorName::try_from(StatusCode::OK),
            Err(StatusCode::OK)
        );
        assert_eq!(
            HttpErrorName::try_from(StatusCode::CONFLICT),
            Ok(HttpErrorName::Conflict)
        );
    }
}
