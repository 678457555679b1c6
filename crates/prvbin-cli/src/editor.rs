//! Interactive paste authoring in the user's editor

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Editor used when `$EDITOR` is unset
pub const FALLBACK_EDITOR: &str = "vim";

/// The editor command line: `$EDITOR` split on whitespace, or the fallback.
pub fn editor_command(env_editor: Option<&str>) -> Vec<String> {
    let words: Vec<String> = env_editor
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        vec![FALLBACK_EDITOR.to_string()]
    } else {
        words
    }
}

/// Open a temporary file in the editor and return what was saved.
///
/// The temporary file is removed when this returns, whatever the outcome.
pub fn compose() -> Result<Vec<u8>> {
    let tmp = tempfile::Builder::new()
        .prefix(".prvbin-")
        .tempfile()
        .context("creating temporary file")?;

    let env_editor = std::env::var("EDITOR").ok();
    let command = editor_command(env_editor.as_deref());
    let (program, args) = command
        .split_first()
        .context("empty editor command")?;

    tracing::debug!(editor = %program, file = %tmp.path().display(), "opening editor");

    let status = Command::new(program)
        .args(args)
        .arg(tmp.path())
        .status()
        .with_context(|| format!("running editor {program}"))?;
    if !status.success() {
        bail!("editor {program} exited with {status}");
    }

    std::fs::read(tmp.path()).with_context(|| format!("reading {}", tmp.path().display()))
}
