//! Captures the version of the `image` crate actually resolved into the
//! build, so `faceprep::backend_version()` can report the linked backend.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let version = image_crate_version().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=FACEPREP_IMAGE_VERSION={version}");

    if let Some(lock) = find_lockfile() {
        println!("cargo:rerun-if-changed={}", lock.display());
    }
}

/// Walk up from the crate manifest until a `Cargo.lock` is found.
///
/// In a workspace the lockfile lives at the workspace root, not next to
/// this crate's manifest.
fn find_lockfile() -> Option<PathBuf> {
    let mut dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").ok()?);
    loop {
        let candidate = dir.join("Cargo.lock");
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

fn image_crate_version() -> Option<String> {
    let lock = fs::read_to_string(find_lockfile()?).ok()?;

    let mut in_image_package = false;
    for line in lock.lines() {
        let line = line.trim();
        if line == "[[package]]" {
            in_image_package = false;
        } else if line == "name = \"image\"" {
            in_image_package = true;
        } else if in_image_package {
            if let Some(rest) = line.strip_prefix("version = \"") {
                return Some(rest.trim_end_matches('"').to_string());
            }
        }
    }
    None
}
