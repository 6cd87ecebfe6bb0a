// Server module entry point
// Listener setup, accept loop and per-connection serving

pub mod connection;
pub mod listener;
pub mod run;

// Re-export the transport entry points
pub use listener::create_reusable_listener;
pub use run::run;
