use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GreetInput {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GreetOutput {
    pub greeting: String,
}

/// Build the greeting for `name`. Any text is accepted as-is.
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}
