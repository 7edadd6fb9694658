use crate::errors::Error;
use crate::status::StatusCode;
use bytes::Bytes;
use paste::paste;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Failed outcome of a response: a message and the status it maps to.
///
/// Serializes as `{"message": ..., "statusCode": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpError {
    pub message: String,
    pub status_code: StatusCode,
}

macro_rules! error_shortcuts {
    ($(
        $(#[$docs:meta])*
        ($name:ident, $status:ident);
    )+) => {
        impl HttpError {
            $(
                $(#[$docs])*
                pub fn $name<M: Into<String>>(message: M) -> HttpError {
                    HttpError::new(StatusCode::$status, message)
                }

                paste! {
                    pub fn [<is_ $name>](&self) -> bool {
                        self.status_code == StatusCode::$status
                    }
                }
            )+
        }
    };
}

error_shortcuts! {
    /// 400, the request itself is malformed.
    (bad_request, BAD_REQUEST);
    /// 404, the target resource does not exist.
    (not_found, NOT_FOUND);
    /// 422, the request is well formed but fails validation.
    (unprocessable_entity, UNPROCESSABLE_ENTITY);
    /// 500, the handler could not complete the request.
    (internal_server_error, INTERNAL_SERVER_ERROR);
}

impl HttpError {
    pub fn new<M: Into<String>>(status_code: StatusCode, message: M) -> HttpError {
        HttpError {
            message: message.into(),
            status_code,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn to_json_bytes(&self) -> Result<Bytes, Error> {
        let json = serde_json::to_vec(self)?;
        Ok(Bytes::from(json))
    }
}

impl From<Error> for HttpError {
    fn from(f: Error) -> Self {
        HttpError::internal_server_error(f.to_string())
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.status_code, self.message)
    }
}

impl std::error::Error for HttpError {}

#[cfg(test)]
mod http_error_tests {
    use super::HttpError;
    use crate::errors::Error;
    use crate::status::StatusCode;

    #[test]
    fn test_shortcut_constructors() {
        assert_eq!(HttpError::bad_request("x").status_code.as_u16(), 400);
        assert_eq!(HttpError::not_found("x").status_code.as_u16(), 404);
        assert_eq!(HttpError::unprocessable_entity("x").status_code.as_u16(), 422);
        assert_eq!(HttpError::internal_server_error("x").status_code.as_u16(), 500);
    }

    #[test]
    fn test_predicates() {
        let error = HttpError::not_found("My resource not is found");

        assert!(error.is_not_found());
        assert!(!error.is_bad_request());
        assert!(!error.is_internal_server_error());
    }

    #[test]
    fn test_custom_status() {
        let error = HttpError::new(StatusCode::CONFLICT, "already exists");

        assert_eq!(error.status_code(), StatusCode::CONFLICT);
        assert_eq!(error.message(), "already exists");
        assert_eq!(error.to_string(), "409 Conflict: already exists");
    }

    #[test]
    fn test_crate_error_becomes_internal_server_error() {
        let error = HttpError::from(Error::ResponseDropped);

        assert!(error.is_internal_server_error());
        assert_eq!(error.message, "Response dropped without being sent");
    }

    #[test]
    fn test_json_shape() {
        let error = HttpError::unprocessable_entity("Field a is wrong");
        let bytes = error.to_json_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "message": "Field a is wrong", "statusCode": 422 })
        );
    }
}
