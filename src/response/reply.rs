use crate::errors::Error;
use crate::headers::Headers;
use crate::status::StatusCode;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Successful outcome of a response, handed to the transport as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply<T> {
    pub body: T,
    pub status: StatusCode,
    pub headers: Headers,
}

impl<T> Reply<T> {
    pub fn new(body: T, status: StatusCode, headers: Headers) -> Reply<T> {
        Reply {
            body,
            status,
            headers,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn map<U, F>(self, f: F) -> Reply<U>
    where
        F: FnOnce(T) -> U,
    {
        Reply {
            body: f(self.body),
            status: self.status,
            headers: self.headers,
        }
    }
}

impl<T: Serialize> Reply<T> {
    /// Encode the body as JSON for the transport to write.
    pub fn json_body(&self) -> Result<Bytes, Error> {
        let json = serde_json::to_vec(&self.body)?;
        Ok(Bytes::from(json))
    }
}
