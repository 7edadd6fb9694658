/// Assert `$expression` matches `$pattern`, guard included, and show what
/// was found otherwise.
macro_rules! assert_match {
    ($expression:expr, $pattern:pat $(if $guard:expr)? $(,)?) => {
        match $expression {
            $pattern $(if $guard)? => (),
            ref found => panic!(
                "expected `{}`, found {:?}",
                stringify!($pattern),
                found
            ),
        }
    };
}

/// Unwrap a successful outcome carrying `$status`.
macro_rules! assert_reply {
    ($outcome:expr, $status:expr) => {
        match $outcome {
            Ok(reply) => {
                assert_eq!(reply.status, $status);
                reply
            }
            Err(error) => panic!("expected a reply, found error {}", error),
        }
    };
}

/// Check a failed outcome carries `$status` and `$message`.
macro_rules! assert_http_error {
    ($outcome:expr, $status:expr, $message:expr) => {
        match $outcome {
            Err(error) => {
                assert_eq!(error.status_code, $status);
                assert_eq!(error.message, $message);
            }
            Ok(reply) => panic!(
                "expected an error, found reply with status {}",
                reply.status
            ),
        }
    };
}
