//! Greeting formatter.

/// Personalized greeting for `name`. Total; no validation.
#[must_use]
pub fn greet(name: &str) -> String {
    format!("Hello, {name}! Nice to see you.")
}
