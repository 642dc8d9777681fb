//! Account composition: greets the current profile with the greeter's message.

use std::io::Write;

use app_support::{AppError, write_line};
use greeter::{Greeter, GreetingProvider};
use profile::{Profile, ProfileProvider};

/// Prefix of the line written by [`run`].
pub const SERVICE_TAG: &str = "[account-service]: ";

/// Composes a profile provider with a greeting provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountApp<P = Profile, G = Greeter> {
    profile: P,
    greeter: G,
}

impl AccountApp {
    /// Account app wired to the production providers.
    pub const fn new() -> Self {
        Self::with_providers(Profile::new(), Greeter::new())
    }

    /// Sum of two integers, wrapping on overflow.
    pub const fn sum(a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }
}

impl<P: ProfileProvider, G: GreetingProvider> AccountApp<P, G> {
    pub const fn with_providers(profile: P, greeter: G) -> Self {
        Self { profile, greeter }
    }

    /// `Hi, <profile>. <greeting>`
    pub fn greeting(&self) -> String {
        let profile = self.profile.current_profile();
        let greeting = format!("Hi, {profile}. {}", self.greeter.greeting());
        tracing::debug!(profile, %greeting, "account: composed greeting");
        greeting
    }
}

/// Write the tagged account greeting to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<(), AppError> {
    let line = format!("{SERVICE_TAG}{}", AccountApp::new().greeting());
    write_line(out, &line)
}
