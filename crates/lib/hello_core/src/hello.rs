//! Greeting function.

/// Prefix placed in front of every name.
pub const GREETING_PREFIX: &str = "Hello ";

/// Returns `"Hello "` followed by `name`.
///
/// The name is used as given: no trimming, casing or validation. An empty
/// name yields `"Hello "`.
pub fn greet(name: &str) -> String {
    let mut greeting = String::with_capacity(GREETING_PREFIX.len() + name.len());
    greeting.push_str(GREETING_PREFIX);
    greeting.push_str(name);
    greeting
}
