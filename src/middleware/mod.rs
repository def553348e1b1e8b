pub mod error_handler;
pub mod request_id;

pub use error_handler::{json_error_handler, route_not_found, ErrorHandler};
pub use request_id::{current_request_id, RequestId, RequestIdValue};
