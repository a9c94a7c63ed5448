//! Beacon - minimal static file server
//!
//! Core library for request parsing, response generation and file serving.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
