//! HTTP protocol layer module
//!
//! Content typing, date stamping and response writing, decoupled from
//! routing business logic.

pub mod content;
pub mod date;
pub mod response;

// Re-export commonly used types
pub use content::Content;
pub use response::write_response;
