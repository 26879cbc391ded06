//! API middleware components

pub mod logging;
pub mod panic;
pub mod request_id;

pub use logging::request_logging_middleware;
pub use panic::{handle_panic, tag_panic_response};
pub use request_id::MakeRequestHexId;
