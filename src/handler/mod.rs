//! Request handler module
//!
//! Responsible for request routing dispatch and the file loading, static
//! serving and concatenation behaviors behind it.

pub mod loader;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
