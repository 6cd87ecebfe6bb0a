//! servelite is a small asynchronous HTTP server for static files with
//! on-request asset concatenation.
//!
//! Request paths map straight onto the configured web root, with `/`
//! serving the configured index page. Two special routes assemble many
//! files into one response: `/concat.js?files=a,b` joins
//! `<web_root>/js/concat/a.js` and `b.js` in request order, and
//! `/concat.css` does the same for stylesheets.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
