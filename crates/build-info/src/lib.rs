//! Version metadata baked in at compile time.
#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]

/// Package version from `Cargo.toml`.
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// Whatever the build script recorded as the short commit SHA.
///
/// Seven hex digits when git data was found. Otherwise a non-hex placeholder:
/// `unknown` from our own fallback, or the stand-in value vergen emits when it
/// downgrades a git failure to a warning. Check [`HAS_GIT_SHA`] before use.
pub const GIT_SHA_SHORT: &str = env!("VERGEN_GIT_SHA");

/// True when [`GIT_SHA_SHORT`] is a real seven-digit hex SHA.
pub const HAS_GIT_SHA: bool = looks_like_short_sha(GIT_SHA_SHORT);

/// Version string shown by `--version`: `0.1.0 (a1b2c3d)`, or just `0.1.0`
/// when no SHA is known.
pub const LONG_VERSION: &str = if HAS_GIT_SHA {
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")")
} else {
    SEMVER
};

const fn looks_like_short_sha(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut all_hex = bytes.len() == 7;
    let mut i = 0;
    while all_hex && i < bytes.len() {
        all_hex = bytes[i].is_ascii_hexdigit();
        i += 1;
    }
    all_hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sha_detection() {
        assert!(looks_like_short_sha("a1b2c3d"));
        assert!(looks_like_short_sha("ABCDEF0"));
        assert!(!looks_like_short_sha("a1b2c3"));
        assert!(!looks_like_short_sha("a1b2c3d4"));
    }

    #[test]
    fn test_placeholders_are_not_shas() {
        assert!(!looks_like_short_sha("unknown"));
        assert!(!looks_like_short_sha("VERGEN_IDEMPOTENT_OUTPUT"));
        assert!(!looks_like_short_sha(""));
    }

    #[test]
    fn test_long_version_starts_with_semver() {
        assert!(LONG_VERSION.starts_with(SEMVER));
    }

    #[test]
    fn test_long_version_includes_sha_only_when_known() {
        assert_eq!(LONG_VERSION.contains(GIT_SHA_SHORT), HAS_GIT_SHA);
        assert_eq!(LONG_VERSION == SEMVER, !HAS_GIT_SHA);
    }
}
