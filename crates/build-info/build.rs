use std::{
    env, fs,
    path::{Path, PathBuf},
};

use vergen_gix::{Emitter, GixBuilder};

include!("../build_common.rs");

/// Environment override that skips git probing entirely.
const SHA_OVERRIDE_VAR: &str = "COMPOSE_BUILD_SHA_SHORT";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={SHA_OVERRIDE_VAR}");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    process_readme_for_rustdoc(&manifest_dir);

    if let Some(sha) = env::var(SHA_OVERRIDE_VAR)
        .ok()
        .and_then(|raw| short_sha(&raw))
    {
        emit_sha(&sha);
        return;
    }

    let Some(repo_root) = find_repo_root(Path::new(&manifest_dir)) else {
        emit_sha("unknown");
        return;
    };

    if let Err(err) = emit_from_git(repo_root) {
        println!("cargo:warning=build-info: git metadata unavailable: {err}");
        emit_sha("unknown");
    }
}

fn emit_from_git(repo_root: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let git = GixBuilder::default()
        .repo_path(Some(repo_root))
        .sha(true)
        .build()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}

fn emit_sha(sha: &str) {
    // `env!("VERGEN_GIT_SHA")` in lib.rs requires this to always be set.
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
}

/// First seven characters of `raw` if they form a hex SHA.
fn short_sha(raw: &str) -> Option<String> {
    let candidate = raw.trim().get(..7)?;
    candidate
        .chars()
        .all(|c| c.is_ascii_hexdigit())
        .then(|| candidate.to_string())
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
