//! Reading paste content and attachments from the local machine

use anyhow::{Context, Result};
use std::path::Path;

use prvbin_paste::{Attachment, ContentSource};

use crate::editor;

/// Resolve the paste content from its source.
pub fn read_content(source: &ContentSource) -> Result<Vec<u8>> {
    match source {
        ContentSource::Text(text) => Ok(text.clone().into_bytes()),
        ContentSource::File(path) => {
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))
        }
        ContentSource::Editor => editor::compose(),
    }
}

/// Read a file into a data-URI attachment named after its base name.
pub fn read_attachment(path: &Path) -> Result<Attachment> {
    let data = std::fs::read(path).with_context(|| format!("reading attachment {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("attachment path has no file name: {}", path.display()))?;
    let mime = sniff_mime(&data);

    tracing::debug!(name = %name, mime, bytes = data.len(), "read attachment");
    Ok(Attachment::from_bytes(name, mime, &data))
}

/// Only the first 512 bytes are considered
const SNIFF_LEN: usize = 512;

/// Guess a MIME type from file content.
pub fn sniff_mime(data: &[u8]) -> &'static str {
    let head = &data[..data.len().min(SNIFF_LEN)];

    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"%PDF-", "application/pdf"),
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xFF\xD8\xFF", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"PK\x03\x04", "application/zip"),
        (b"\x1F\x8B\x08", "application/x-gzip"),
        (b"%!PS-Adobe-", "application/postscript"),
        (b"OggS\x00", "application/ogg"),
    ];

    if let Some(&(_, mime)) = SIGNATURES.iter().find(|(magic, _)| head.starts_with(magic)) {
        return mime;
    }
    if head.len() >= 12 && &head[..4] == b"RIFF" && &head[8..12] == b"WEBP" {
        return "image/webp";
    }

    let trimmed = head.trim_ascii_start();
    let lower = trimmed[..trimmed.len().min(14)].to_ascii_lowercase();
    if lower.starts_with(b"<!doctype html") || lower.starts_with(b"<html") {
        return "text/html; charset=utf-8";
    }

    if looks_like_text(head) {
        "text/plain; charset=utf-8"
    } else {
        "application/octet-stream"
    }
}

fn looks_like_text(head: &[u8]) -> bool {
    let is_binary = |b: &u8| matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F);
    if head.iter().any(is_binary) {
        return false;
    }
    match std::str::from_utf8(head) {
        Ok(_) => true,
        // A multi-byte character cut off at the sniff boundary is still text
        Err(e) => e.error_len().is_none(),
    }
}
