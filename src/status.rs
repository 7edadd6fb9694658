use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP status code carried by a response.
///
/// Any `u16` is accepted; the associated constants only name the common ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(u16);

macro_rules! status_code {
    (
        $(
            ($code:expr, $name:ident, $phrase:expr);
        )+
    ) => {
        impl StatusCode {
            $(
                pub const $name: StatusCode = StatusCode($code);
            )+

            /// Canonical reason phrase, `None` for codes outside the catalogue.
            pub fn reason(&self) -> Option<&'static str> {
                match self.0 {
                    $(
                        $code => Some($phrase),
                    )+
                    _ => None
                }
            }
        }
    };
}

status_code! {
    (100, CONTINUE, "Continue");
    (101, SWITCHING_PROTOCOLS, "Switching Protocols");
    (200, OK, "OK");
    (201, CREATED, "Created");
    (202, ACCEPTED, "Accepted");
    (204, NO_CONTENT, "No Content");
    (206, PARTIAL_CONTENT, "Partial Content");
    (301, MOVED_PERMANENTLY, "Moved Permanently");
    (302, FOUND, "Found");
    (303, SEE_OTHER, "See Other");
    (304, NOT_MODIFIED, "Not Modified");
    (307, TEMPORARY_REDIRECT, "Temporary Redirect");
    (308, PERMANENT_REDIRECT, "Permanent Redirect");
    (400, BAD_REQUEST, "Bad Request");
    (401, UNAUTHORIZED, "Unauthorized");
    (403, FORBIDDEN, "Forbidden");
    (404, NOT_FOUND, "Not Found");
    (405, METHOD_NOT_ALLOWED, "Method Not Allowed");
    (409, CONFLICT, "Conflict");
    (410, GONE, "Gone");
    (412, PRECONDITION_FAILED, "Precondition Failed");
    (415, UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type");
    (422, UNPROCESSABLE_ENTITY, "Unprocessable Entity");
    (429, TOO_MANY_REQUESTS, "Too Many Requests");
    (500, INTERNAL_SERVER_ERROR, "Internal Server Error");
    (501, NOT_IMPLEMENTED, "Not Implemented");
    (502, BAD_GATEWAY, "Bad Gateway");
    (503, SERVICE_UNAVAILABLE, "Service Unavailable");
    (504, GATEWAY_TIMEOUT, "Gateway Timeout");
}

impl StatusCode {
    pub const fn new(code: u16) -> StatusCode {
        StatusCode(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn is_informational(&self) -> bool {
        (100..200).contains(&self.0)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    pub fn is_redirection(&self) -> bool {
        (300..400).contains(&self.0)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        StatusCode::OK
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{} {}", self.0, reason),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod status_tests {
    use super::StatusCode;

    #[test]
    fn test_default_is_ok() {
        assert_eq!(StatusCode::default(), StatusCode::OK);
        assert_eq!(StatusCode::default().as_u16(), 200);
    }

    #[test]
    fn test_reason_for_known_and_unknown_codes() {
        assert_eq!(StatusCode::NOT_MODIFIED.reason(), Some("Not Modified"));
        assert_eq!(
            StatusCode::UNPROCESSABLE_ENTITY.reason(),
            Some("Unprocessable Entity")
        );
        assert_eq!(StatusCode::new(299).reason(), None);
    }

    #[test]
    fn test_classes() {
        assert!(StatusCode::CREATED.is_success());
        assert!(StatusCode::NOT_MODIFIED.is_redirection());
        assert!(StatusCode::NOT_FOUND.is_client_error());
        assert!(StatusCode::INTERNAL_SERVER_ERROR.is_server_error());
        assert!(!StatusCode::new(999).is_server_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::BAD_REQUEST.to_string(), "400 Bad Request");
        assert_eq!(StatusCode::new(599).to_string(), "599");
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&StatusCode::CREATED).unwrap();
        assert_eq!(json, "201");
    }
}
