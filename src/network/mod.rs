//! Network layer - HTTP request execution and diagnostic dumps

pub mod client;
pub mod dump;

pub use client::{build_request, create_client, execute_request};
