mod pipeline;
pub mod project;
pub mod request;
mod traced;

pub use pipeline::{LoweringSummary, lower_file, lower_request};
pub use request::{LoweringRequest, MethodRequest, RequestError, RequestSource};
