// HTTP status registry
//
// A fixed table of IANA-registered and commonly seen non-standard status
// codes. The table is compiled in and never mutated, so lookups are safe
// from any thread.

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Broad class of an HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// 1xx
    Informational,
    /// 2xx
    Success,
    /// 3xx
    Redirection,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
    /// No registry entry
    Unknown,
}

macro_rules! http_statuses {
    ($( $variant:ident = $code:literal => $phrase:literal, )+) => {
        /// Symbolic HTTP status resolved from a raw status code
        ///
        /// `Unknown` is the sentinel for any code without a registry entry.
        /// Its numeric code is 0, which is also what HAR producers record
        /// when no response was received, so the two cases coincide.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
        #[repr(u16)]
        pub enum HttpStatus {
            #[default]
            Unknown = 0,
            $( $variant = $code, )+
        }

        impl HttpStatus {
            /// Every registered status, in ascending code order
            pub const REGISTERED: &'static [HttpStatus] = &[ $( HttpStatus::$variant, )+ ];

            /// Resolve a raw code against the registry.
            ///
            /// Total: negative, oversized and unassigned codes all resolve
            /// to [`HttpStatus::Unknown`].
            pub fn resolve(code: i64) -> HttpStatus {
                match code {
                    $( $code => HttpStatus::$variant, )+
                    _ => HttpStatus::Unknown,
                }
            }

            /// Reason phrase for this status
            pub fn reason_phrase(self) -> &'static str {
                match self {
                    HttpStatus::Unknown => "Unknown Status",
                    $( HttpStatus::$variant => $phrase, )+
                }
            }
        }
    };
}

http_statuses! {
    Continue = 100 => "Continue",
    SwitchingProtocols = 101 => "Switching Protocols",
    Processing = 102 => "Processing",
    EarlyHints = 103 => "Early Hints",
    Ok = 200 => "OK",
    Created = 201 => "Created",
    Accepted = 202 => "Accepted",
    NonAuthoritativeInformation = 203 => "Non-Authoritative Information",
    NoContent = 204 => "No Content",
    ResetContent = 205 => "Reset Content",
    PartialContent = 206 => "Partial Content",
    MultiStatus = 207 => "Multi-Status",
    AlreadyReported = 208 => "Already Reported",
    ThisIsFine = 218 => "This Is Fine",
    ImUsed = 226 => "IM Used",
    MultipleChoices = 300 => "Multiple Choices",
    MovedPermanently = 301 => "Moved Permanently",
    Found = 302 => "Found",
    SeeOther = 303 => "See Other",
    NotModified = 304 => "Not Modified",
    UseProxy = 305 => "Use Proxy",
    TemporaryRedirect = 307 => "Temporary Redirect",
    PermanentRedirect = 308 => "Permanent Redirect",
    BadRequest = 400 => "Bad Request",
    Unauthorized = 401 => "Unauthorized",
    PaymentRequired = 402 => "Payment Required",
    Forbidden = 403 => "Forbidden",
    NotFound = 404 => "Not Found",
    MethodNotAllowed = 405 => "Method Not Allowed",
    NotAcceptable = 406 => "Not Acceptable",
    ProxyAuthenticationRequired = 407 => "Proxy Authentication Required",
    RequestTimeout = 408 => "Request Timeout",
    Conflict = 409 => "Conflict",
    Gone = 410 => "Gone",
    LengthRequired = 411 => "Length Required",
    PreconditionFailed = 412 => "Precondition Failed",
    ContentTooLarge = 413 => "Content Too Large",
    UriTooLong = 414 => "URI Too Long",
    UnsupportedMediaType = 415 => "Unsupported Media Type",
    RangeNotSatisfiable = 416 => "Range Not Satisfiable",
    ExpectationFailed = 417 => "Expectation Failed",
    ImATeapot = 418 => "I'm a teapot",
    PageExpired = 419 => "Page Expired",
    EnhanceYourCalm = 420 => "Enhance Your Calm",
    MisdirectedRequest = 421 => "Misdirected Request",
    UnprocessableContent = 422 => "Unprocessable Content",
    Locked = 423 => "Locked",
    FailedDependency = 424 => "Failed Dependency",
    TooEarly = 425 => "Too Early",
    UpgradeRequired = 426 => "Upgrade Required",
    PreconditionRequired = 428 => "Precondition Required",
    TooManyRequests = 429 => "Too Many Requests",
    ShopifySecurityRejection = 430 => "Request Header Fields Too Large (Shopify)",
    RequestHeaderFieldsTooLarge = 431 => "Request Header Fields Too Large",
    LoginTimeout = 440 => "Login Time-out",
    NoResponse = 444 => "No Response",
    RetryWith = 449 => "Retry With",
    BlockedByParentalControls = 450 => "Blocked by Windows Parental Controls",
    UnavailableForLegalReasons = 451 => "Unavailable For Legal Reasons",
    ClientClosedConnection = 460 => "Client Closed Connection",
    TooManyForwardedAddresses = 463 => "Too Many Forwarded IP Addresses",
    RequestHeaderTooLarge = 494 => "Request Header Too Large",
    SslCertificateError = 495 => "SSL Certificate Error",
    SslCertificateRequired = 496 => "SSL Certificate Required",
    HttpRequestSentToHttpsPort = 497 => "HTTP Request Sent to HTTPS Port",
    InvalidToken = 498 => "Invalid Token",
    ClientClosedRequest = 499 => "Client Closed Request",
    InternalServerError = 500 => "Internal Server Error",
    NotImplemented = 501 => "Not Implemented",
    BadGateway = 502 => "Bad Gateway",
    ServiceUnavailable = 503 => "Service Unavailable",
    GatewayTimeout = 504 => "Gateway Timeout",
    HttpVersionNotSupported = 505 => "HTTP Version Not Supported",
    VariantAlsoNegotiates = 506 => "Variant Also Negotiates",
    InsufficientStorage = 507 => "Insufficient Storage",
    LoopDetected = 508 => "Loop Detected",
    BandwidthLimitExceeded = 509 => "Bandwidth Limit Exceeded",
    NotExtended = 510 => "Not Extended",
    NetworkAuthenticationRequired = 511 => "Network Authentication Required",
    WebServerUnknownError = 520 => "Web Server Returned an Unknown Error",
    WebServerIsDown = 521 => "Web Server Is Down",
    ConnectionTimedOut = 522 => "Connection Timed Out",
    OriginIsUnreachable = 523 => "Origin Is Unreachable",
    TimeoutOccurred = 524 => "A Timeout Occurred",
    SslHandshakeFailed = 525 => "SSL Handshake Failed",
    InvalidSslCertificate = 526 => "Invalid SSL Certificate",
    RailgunError = 527 => "Railgun Error",
    SiteIsOverloaded = 529 => "Site is overloaded",
    SiteIsFrozen = 530 => "Site is frozen",
    UnauthorizedByLoadBalancer = 561 => "Unauthorized (load balancer)",
    NetworkReadTimeout = 598 => "Network Read Timeout Error",
    NetworkConnectTimeout = 599 => "Network Connect Timeout Error",
}

impl HttpStatus {
    /// Numeric code; 0 for the sentinel
    pub fn code(self) -> i64 {
        self as u16 as i64
    }

    /// Whether `code` has its own registry entry
    pub fn is_registered(code: i64) -> bool {
        HttpStatus::resolve(code) != HttpStatus::Unknown
    }

    /// Whether this is the unknown-status sentinel
    pub fn is_unknown(self) -> bool {
        self == HttpStatus::Unknown
    }

    pub fn category(self) -> StatusCategory {
        match self.code() {
            100..=199 => StatusCategory::Informational,
            200..=299 => StatusCategory::Success,
            300..=399 => StatusCategory::Redirection,
            400..=499 => StatusCategory::ClientError,
            500..=599 => StatusCategory::ServerError,
            _ => StatusCategory::Unknown,
        }
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason_phrase())
    }
}
