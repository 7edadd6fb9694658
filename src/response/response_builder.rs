use crate::errors::Error;
use crate::headers::Headers;
use crate::response::completion::{Completion, Outcome, Sink};
use crate::response::{HttpError, Reply};
use crate::status::StatusCode;
use std::mem;

/// Construction options for a [`ResponseBuilder`].
///
/// `callback` receives the single outcome of the response.
pub struct ResponseOptions<F> {
    pub callback: F,
}

/// Single-use response builder.
///
/// Status and headers are accumulated with the `set_*` methods, then exactly
/// one terminal method (`send`, `not_modified`, `fail` or one of the error
/// shortcuts) consumes the builder and delivers the outcome. A builder that
/// is dropped without a terminal call delivers a 500 instead.
///
/// ```
/// use http11_response::ResponseBuilder;
///
/// let res = ResponseBuilder::<u8>::with_callback(|outcome| {
///     assert_eq!(outcome.unwrap().body, 1);
/// });
/// res.set_header("x-foo", "bar").send(1);
/// ```
///
/// A second terminal call does not compile:
///
/// ```compile_fail
/// use http11_response::ResponseBuilder;
///
/// let res = ResponseBuilder::<u8>::with_callback(|_| {});
/// res.send(1);
/// res.not_found("gone");
/// ```
///
/// Neither does changing the response once it is sent:
///
/// ```compile_fail
/// use http11_response::ResponseBuilder;
///
/// let res = ResponseBuilder::<u8>::with_callback(|_| {});
/// res.send(1);
/// let res = res.set_header("x-foo", "bar");
/// ```
pub struct ResponseBuilder<T> {
    status: StatusCode,
    headers: Headers,
    sink: Option<Sink<T>>,
}

macro_rules! terminal_error_shortcuts {
    ($(
        $(#[$docs:meta])*
        $name:ident;
    )+) => {
        impl<T> ResponseBuilder<T> {
            $(
                $(#[$docs])*
                pub fn $name<M: Into<String>>(self, message: M) {
                    self.complete(Err(HttpError::$name(message)));
                }
            )+
        }
    };
}

terminal_error_shortcuts! {
    /// Fail with 400 Bad Request.
    bad_request;
    /// Fail with 404 Not Found.
    not_found;
    /// Fail with 422 Unprocessable Entity.
    unprocessable_entity;
    /// Fail with 500 Internal Server Error.
    internal_server_error;
}

impl<T> ResponseBuilder<T> {
    pub fn new<F>(options: ResponseOptions<F>) -> ResponseBuilder<T>
    where
        F: FnOnce(Outcome<T>) + Send + 'static,
    {
        ResponseBuilder::with_sink(Sink::Callback(Box::new(options.callback)))
    }

    pub fn with_callback<F>(callback: F) -> ResponseBuilder<T>
    where
        F: FnOnce(Outcome<T>) + Send + 'static,
    {
        ResponseBuilder::new(ResponseOptions { callback })
    }

    /// Builder paired with a future that resolves to its outcome.
    pub fn channel() -> (ResponseBuilder<T>, Completion<T>) {
        let (sink, completion) = Completion::pair();
        (ResponseBuilder::with_sink(sink), completion)
    }

    fn with_sink(sink: Sink<T>) -> ResponseBuilder<T> {
        ResponseBuilder {
            status: StatusCode::OK,
            headers: Headers::new(),
            sink: Some(sink),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn status_mut(&mut self) -> &mut StatusCode {
        &mut self.status
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Any code is accepted, known or not.
    pub fn set_status(self, code: u16) -> Self {
        self.set_status_code(StatusCode::new(code))
    }

    pub fn set_status_code(mut self, status: StatusCode) -> Self {
        self.status = status;
        trace!("response status set to {}", self.status);
        self
    }

    pub fn set_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        trace!("response header {:?} set", name);
        self.headers.insert(name, value);
        self
    }

    pub fn set_headers<I, N, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.extend(headers);
        self
    }

    /// Deliver `body` with the current status and headers.
    pub fn send(mut self, body: T) {
        let headers = mem::take(&mut self.headers);
        let reply = Reply::new(body, self.status, headers);
        self.complete(Ok(reply));
    }

    /// Deliver a 304 with an empty body and the current headers.
    pub fn not_modified(self)
    where
        T: Default,
    {
        self.set_status_code(StatusCode::NOT_MODIFIED)
            .send(T::default());
    }

    /// Fail with an arbitrary status; the named shortcuts are built on this.
    pub fn fail<M: Into<String>>(self, status: StatusCode, message: M) {
        self.complete(Err(HttpError::new(status, message)));
    }

    fn complete(mut self, outcome: Outcome<T>) {
        if let Some(sink) = self.sink.take() {
            match &outcome {
                Ok(reply) => debug!("response sent with status {}", reply.status),
                Err(error) => debug!(
                    "response failed with status {}: {}",
                    error.status_code, error.message
                ),
            }

            sink.deliver(outcome);
        }
    }
}

impl<T> Drop for ResponseBuilder<T> {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            warn!("response builder dropped without being sent");
            sink.deliver(Err(HttpError::from(Error::ResponseDropped)));
        }
    }
}
