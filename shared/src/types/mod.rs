//! Type definitions module
//!
//! - `pagination` - Offset/limit window for list endpoints
//! - `response` - API response wrapper

pub mod pagination;
pub mod response;

pub use pagination::PageWindow;
pub use response::ApiResponse;
