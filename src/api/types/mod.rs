//! API request/response types and extractors

pub mod error;
pub mod json;
pub mod path;
pub mod request_id;

pub use error::{ApiError, ApiErrorCode, ApiErrorResponse};
pub use json::Json;
pub use path::Path;
pub use request_id::{RequestId, REQUEST_ID_HEADER};
