//! Version metadata for `transcript-cleaner --version`.
//!
//! Every build gets `TC_BUILD_DATE`. Dev builds also get `VERGEN_GIT_SHA`,
//! which reads `unknown` when git cannot describe the source tree. Builds
//! with the `release` feature carry the date alone.

use std::process::Command;

/// Today's date as `YYYY-MM-DD`, or `unknown`.
fn build_date() -> String {
    Command::new("date")
        .arg("+%Y-%m-%d")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|date| date.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let gitcl = match GitclBuilder::default().sha(true).build() {
        Ok(gitcl) => gitcl,
        Err(e) => return sha_unavailable(&e),
    };

    let emitted = Emitter::default()
        .add_instructions(&gitcl)
        .and_then(|emitter| emitter.emit());
    if let Err(e) = emitted {
        sha_unavailable(&e);
    }
}

#[cfg(not(feature = "release"))]
fn sha_unavailable(reason: &dyn std::fmt::Display) {
    println!("cargo:warning=git commit hash unavailable: {reason}");
    println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
}

fn main() {
    println!("cargo:rustc-env=TC_BUILD_DATE={}", build_date());

    #[cfg(not(feature = "release"))]
    emit_git_sha();
}
