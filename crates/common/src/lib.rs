//! Common utilities for greeter capabilities.
//!
//! This crate provides helpers for:
//! - Reading JSON input from stdin
//! - Writing JSON output to stdout
//! - Error handling patterns
//! - Logging to stderr

pub mod log;

use serde::{de::DeserializeOwned, Serialize};
use std::io::Read;

// ============ Error Type ============

/// Error type for capability operations.
#[derive(Debug, Serialize)]
pub struct CapabilityError {
    pub error: String,
}

impl CapabilityError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

impl std::fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for CapabilityError {}

// ============ Input/Output Helpers ============

/// Parse raw JSON text into the capability's input type.
pub fn parse_input<T: DeserializeOwned>(raw: &str) -> Result<T, CapabilityError> {
    serde_json::from_str(raw)
        .map_err(|e| CapabilityError::new(format!("Invalid JSON input: {}", e)))
}

/// Read all of stdin as text.
pub fn read_stdin() -> Result<String, CapabilityError> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| CapabilityError::new(format!("Failed to read stdin: {}", e)))?;
    Ok(input)
}

/// Render a value as a single JSON line, falling back to an error object.
fn render<T: Serialize>(output: &T) -> String {
    match serde_json::to_string(output) {
        Ok(json) => json,
        Err(e) => render_error(&format!("Failed to serialize output: {}", e)),
    }
}

fn render_error(msg: &str) -> String {
    log::error(msg);
    // A struct with a single String field always serializes.
    serde_json::to_string(&CapabilityError::new(msg))
        .unwrap_or_else(|_| String::from(r#"{"error":"unserializable error"}"#))
}

/// Write an error response to stdout as JSON.
pub fn write_error(msg: &str) {
    println!("{}", render_error(msg));
}

/// Decode `raw`, run `handler` and return the JSON line to emit.
///
/// This is the body of [`run`] without the stdin/stdout plumbing.
pub fn handle<I, O, F>(raw: &str, handler: F) -> String
where
    I: DeserializeOwned,
    O: Serialize,
    F: FnOnce(I) -> Result<O, CapabilityError>,
{
    match parse_input::<I>(raw).and_then(handler) {
        Ok(output) => render(&output),
        Err(e) => render_error(&e.error),
    }
}

/// Run a capability with automatic error handling.
pub fn run<I, O, F>(handler: F)
where
    I: DeserializeOwned,
    O: Serialize,
    F: FnOnce(I) -> Result<O, CapabilityError>,
{
    match read_stdin() {
        Ok(input) => println!("{}", handle(&input, handler)),
        Err(e) => write_error(&e.error),
    }
}

// Re-export commonly used items
pub use serde;
pub use serde_json;
