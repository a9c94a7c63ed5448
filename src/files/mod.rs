//! Static file serving.
//!
//! - **`resolve`**: maps a request path onto the document root
//! - **`handler`**: picks the status for a parsed request and writes the response

pub mod handler;
pub mod resolve;

pub use handler::respond;
pub use resolve::resolve;
