#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

/// The greeting returned by [`Greeter`].
pub const GREETER_MESSAGE: &str = "Hello world from Greeter.";

/// Source of a greeting message.
///
/// Implementations must return a non-empty string and return the same value
/// on every call.
pub trait GreetingProvider {
    /// The greeting message.
    fn greeting(&self) -> &'static str;
}

/// Greeting provider backed by [`GREETER_MESSAGE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greeter;

impl Greeter {
    pub const fn new() -> Self {
        Self
    }
}

impl GreetingProvider for Greeter {
    fn greeting(&self) -> &'static str {
        tracing::trace!(greeting = GREETER_MESSAGE, "greeter: providing greeting");
        GREETER_MESSAGE
    }
}
