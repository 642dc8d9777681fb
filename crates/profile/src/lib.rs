#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

/// Name of the profile returned by [`Profile`].
pub const PROFILE_NAME: &str = "Alice";

/// Source of the current profile name.
pub trait ProfileProvider {
    /// Name of the current profile. Never empty.
    fn current_profile(&self) -> &'static str;
}

/// Profile provider backed by [`PROFILE_NAME`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Profile;

impl Profile {
    pub const fn new() -> Self {
        Self
    }
}

impl ProfileProvider for Profile {
    fn current_profile(&self) -> &'static str {
        tracing::trace!(profile = PROFILE_NAME, "profile: providing current profile");
        PROFILE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_profile_is_not_empty() {
        assert!(!Profile::new().current_profile().is_empty());
    }

    #[test]
    fn test_current_profile_is_alice() {
        assert_eq!(Profile.current_profile(), "Alice");
    }
}
