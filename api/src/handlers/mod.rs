pub mod error;

pub use error::{bad_request, ApiError};
