//! HTTP protocol handling.
//!
//! - **`connection`**: drives one accepted stream through read, parse, respond, close
//! - **`parser`**: turns header lines into a [`request::Request`]
//! - **`request`**: the parsed request and its method
//! - **`date`**: the date layout used by `If-Modified-Since`, `Date` and `Last-Modified`
//! - **`response`**: status codes and the fixed response shapes
//! - **`writer`**: serializes a response onto a stream
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← header lines up to the first blank line
//!        └──────┬──────┘
//!               │ parse (never fails, may yield the malformed sentinel)
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← 200 / 304 / 400 / 404 / 501
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← always, whatever Connection says
//!        └──────────────────┘
//! ```

pub mod connection;
pub mod date;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
