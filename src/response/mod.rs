mod completion;
mod http_error;
mod reply;
mod response_builder;

pub use completion::{Completion, Outcome};
pub use http_error::*;
pub use reply::*;
pub use response_builder::*;
