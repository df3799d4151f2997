//! # Web Library
//!
//! HTTP handlers, middleware, routes, and server setup.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{router, start_server, AppState, ServerConfig};

#[cfg(test)]
mod test_support;
