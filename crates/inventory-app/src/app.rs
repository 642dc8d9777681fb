//! Inventory composition: greets the current profile.

use std::io::Write;

use app_support::{AppError, write_line};
use profile::{Profile, ProfileProvider};

/// Prefix of the line written by [`run`].
pub const SERVICE_TAG: &str = "[inventory-app] ";

#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryApp<P = Profile> {
    profile: P,
}

impl InventoryApp {
    pub const fn new() -> Self {
        Self::with_profile(Profile::new())
    }
}

impl<P: ProfileProvider> InventoryApp<P> {
    pub const fn with_profile(profile: P) -> Self {
        Self { profile }
    }

    /// `Hi, <profile>.`
    pub fn greeting(&self) -> String {
        let profile = self.profile.current_profile();
        tracing::debug!(profile, "inventory: composing greeting");
        format!("Hi, {profile}.")
    }
}

/// Write the tagged inventory greeting to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<(), AppError> {
    let line = format!("{SERVICE_TAG}{}", InventoryApp::new().greeting());
    write_line(out, &line)
}
