//! Engine network error codes and their portable classification.
//!
//! The constants mirror the engine's enumerated network/TLS error values so
//! bindings can pass raw codes straight through from load-error callbacks.

/// Portable classification of a failed navigation, carried by
/// [`WebViewEvent::Error`](crate::events::WebViewEvent::Error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    Other,
    UserCancelled,
    NotFound,
    Connection,
    Auth,
    Security,
    Certificate,
    Request,
}

pub const ERR_FAILED: i32 = -2;
pub const ERR_ABORTED: i32 = -3;
pub const ERR_INVALID_ARGUMENT: i32 = -4;
pub const ERR_INVALID_HANDLE: i32 = -5;
pub const ERR_FILE_NOT_FOUND: i32 = -6;
pub const ERR_TIMED_OUT: i32 = -7;
pub const ERR_FILE_TOO_BIG: i32 = -8;
pub const ERR_UNEXPECTED: i32 = -9;
pub const ERR_ACCESS_DENIED: i32 = -10;
pub const ERR_NOT_IMPLEMENTED: i32 = -11;
pub const ERR_CONNECTION_CLOSED: i32 = -100;
pub const ERR_CONNECTION_RESET: i32 = -101;
pub const ERR_CONNECTION_REFUSED: i32 = -102;
pub const ERR_CONNECTION_ABORTED: i32 = -103;
pub const ERR_CONNECTION_FAILED: i32 = -104;
pub const ERR_NAME_NOT_RESOLVED: i32 = -105;
pub const ERR_INTERNET_DISCONNECTED: i32 = -106;
pub const ERR_SSL_PROTOCOL_ERROR: i32 = -107;
pub const ERR_ADDRESS_INVALID: i32 = -108;
pub const ERR_ADDRESS_UNREACHABLE: i32 = -109;
pub const ERR_SSL_CLIENT_AUTH_CERT_NEEDED: i32 = -110;
pub const ERR_TUNNEL_CONNECTION_FAILED: i32 = -111;
pub const ERR_NO_SSL_VERSIONS_ENABLED: i32 = -112;
pub const ERR_SSL_VERSION_OR_CIPHER_MISMATCH: i32 = -113;
pub const ERR_SSL_RENEGOTIATION_REQUESTED: i32 = -114;
pub const ERR_CERT_COMMON_NAME_INVALID: i32 = -200;
pub const ERR_CERT_DATE_INVALID: i32 = -201;
pub const ERR_CERT_AUTHORITY_INVALID: i32 = -202;
pub const ERR_CERT_CONTAINS_ERRORS: i32 = -203;
pub const ERR_CERT_NO_REVOCATION_MECHANISM: i32 = -204;
pub const ERR_CERT_UNABLE_TO_CHECK_REVOCATION: i32 = -205;
pub const ERR_CERT_REVOKED: i32 = -206;
pub const ERR_CERT_INVALID: i32 = -207;
pub const ERR_CERT_END: i32 = -208;
pub const ERR_INVALID_URL: i32 = -300;
pub const ERR_DISALLOWED_URL_SCHEME: i32 = -301;
pub const ERR_UNKNOWN_URL_SCHEME: i32 = -302;
pub const ERR_TOO_MANY_REDIRECTS: i32 = -310;
pub const ERR_UNSAFE_REDIRECT: i32 = -311;
pub const ERR_UNSAFE_PORT: i32 = -312;
pub const ERR_INVALID_RESPONSE: i32 = -320;
pub const ERR_INVALID_CHUNKED_ENCODING: i32 = -321;
pub const ERR_METHOD_NOT_SUPPORTED: i32 = -322;
pub const ERR_UNEXPECTED_PROXY_AUTH: i32 = -323;
pub const ERR_EMPTY_RESPONSE: i32 = -324;
pub const ERR_RESPONSE_HEADERS_TOO_BIG: i32 = -325;
pub const ERR_CACHE_MISS: i32 = -400;
pub const ERR_INSECURE_RESPONSE: i32 = -501;

/// Classify a raw engine error code. Codes outside the known table fall back
/// to [`NavigationError::Other`].
pub fn categorize(code: i32) -> NavigationError {
    match code {
        ERR_ABORTED => NavigationError::UserCancelled,
        ERR_FILE_NOT_FOUND => NavigationError::NotFound,
        ERR_TIMED_OUT
        | ERR_CONNECTION_CLOSED
        | ERR_CONNECTION_RESET
        | ERR_CONNECTION_REFUSED
        | ERR_CONNECTION_ABORTED
        | ERR_CONNECTION_FAILED
        | ERR_NAME_NOT_RESOLVED
        | ERR_INTERNET_DISCONNECTED
        | ERR_ADDRESS_UNREACHABLE
        | ERR_TUNNEL_CONNECTION_FAILED => NavigationError::Connection,
        ERR_ACCESS_DENIED | ERR_SSL_CLIENT_AUTH_CERT_NEEDED => NavigationError::Auth,
        ERR_SSL_PROTOCOL_ERROR
        | ERR_NO_SSL_VERSIONS_ENABLED
        | ERR_SSL_VERSION_OR_CIPHER_MISMATCH
        | ERR_UNSAFE_REDIRECT
        | ERR_UNSAFE_PORT
        | ERR_INSECURE_RESPONSE => NavigationError::Security,
        ERR_CERT_COMMON_NAME_INVALID
        | ERR_CERT_DATE_INVALID
        | ERR_CERT_AUTHORITY_INVALID
        | ERR_CERT_CONTAINS_ERRORS
        | ERR_CERT_NO_REVOCATION_MECHANISM
        | ERR_CERT_UNABLE_TO_CHECK_REVOCATION
        | ERR_CERT_REVOKED
        | ERR_CERT_INVALID
        | ERR_CERT_END => NavigationError::Certificate,
        ERR_ADDRESS_INVALID
        | ERR_SSL_RENEGOTIATION_REQUESTED
        | ERR_INVALID_URL
        | ERR_DISALLOWED_URL_SCHEME
        | ERR_UNKNOWN_URL_SCHEME => NavigationError::Request,
        ERR_FAILED
        | ERR_INVALID_ARGUMENT
        | ERR_INVALID_HANDLE
        | ERR_FILE_TOO_BIG
        | ERR_UNEXPECTED
        | ERR_NOT_IMPLEMENTED
        | ERR_TOO_MANY_REDIRECTS
        | ERR_INVALID_RESPONSE
        | ERR_INVALID_CHUNKED_ENCODING
        | ERR_METHOD_NOT_SUPPORTED
        | ERR_UNEXPECTED_PROXY_AUTH
        | ERR_EMPTY_RESPONSE
        | ERR_RESPONSE_HEADERS_TOO_BIG
        | ERR_CACHE_MISS => NavigationError::Other,
        _ => NavigationError::Other,
    }
}
