//! Stamps the waypoint-api binary with its build identity
//!
//! The startup log reports GIT_HASH, BUILD_TIMESTAMP
//! and BUILD_PROFILE. The script reruns when this file or the workspace's
//! checked-out commit changes, not on every source edit.

use std::path::Path;
use std::process::Command;

/// Workspace-root git metadata, relative to this crate
const GIT_HEAD: &str = "../.git/HEAD";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // A missing path would force a rerun on every build
    if Path::new(GIT_HEAD).exists() {
        println!("cargo:rerun-if-changed={}", GIT_HEAD);
    }

    let git_hash = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    let build_timestamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false);
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp);
    println!("cargo:rustc-env=BUILD_PROFILE={}", profile);
}
