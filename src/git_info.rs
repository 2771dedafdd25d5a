// src/git_info.rs
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Full commit hash of `HEAD` in the process working directory.
///
/// Fails when git is not installed or the working directory is not inside
/// a repository; the error is propagated to the caller as-is.
pub fn git_revision_hash() -> Result<String> {
    rev_parse(Path::new("."), false)
}

/// Abbreviated commit hash of `HEAD` in the process working directory.
pub fn git_revision_short_hash() -> Result<String> {
    rev_parse(Path::new("."), true)
}

fn rev_parse(repo: &Path, short: bool) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.arg("rev-parse");
    if short {
        cmd.arg("--short");
    }
    let output = cmd
        .arg("HEAD")
        .current_dir(repo)
        .output()
        .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
        bail!(
            "git rev-parse failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let hash = String::from_utf8(output.stdout)
        .context("Invalid UTF-8 in git rev-parse output")?
        .trim()
        .to_string();
    Ok(hash)
}
