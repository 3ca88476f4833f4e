//! # eh
//!
//! A small command-line client for path-based APIs protected by HTTP basic
//! authentication. One invocation issues exactly one request:
//!
//! - `EHURI` (or `-ehuri`) names the base endpoint
//! - `EHAUTH` (or `-ehauth`) holds `user:secret` credentials
//! - positional arguments become path segments
//! - `-f FILE` or `-c` (stdin) supply a body and turn the call into a POST
//!
//! ## Architecture
//! Linear pipeline, no shared state:
//! - `cli` / `config` - flags and environment resolved into one `Config`
//! - `body` - request body from a file or stdin
//! - `network` - reqwest execution and `-v` dumps
//! - `app` - ties the steps together

pub mod app;
pub mod body;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod network;

// Re-export commonly used types
pub use cli::Args;
pub use config::Config;
pub use error::EhError;
pub use models::{BodySource, Credentials, HttpMethod, Request};
