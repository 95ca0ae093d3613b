//! # hello_core
//!
//! Greeting logic for Hello.

pub mod hello;

pub use hello::{GREETING_PREFIX, greet};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
