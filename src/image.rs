use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const SNIFF_LEN: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageKind {
    pub fn mime(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Gif => "image/gif",
            ImageKind::Webp => "image/webp",
        }
    }

    /// Identify an image format from its leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<ImageKind> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageKind::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageKind::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(ImageKind::Gif)
        } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            Some(ImageKind::Webp)
        } else {
            None
        }
    }
}

/// What the image reference currently points at, for the preview panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedImage {
    Url(String),
    File {
        path: PathBuf,
        kind: ImageKind,
        len: u64,
    },
}

/// Preview state for the image reference field. `load_failed` is display
/// state only; a bad reference never blocks submitting a URL.
#[derive(Clone, Debug, Default)]
pub struct ImageState {
    pub resolved: Option<ResolvedImage>,
    pub load_failed: bool,
}

impl ImageState {
    /// Re-classify the reference after an edit. The failure flag resets
    /// before the new reference is evaluated.
    pub fn evaluate(&mut self, reference: &str) {
        self.load_failed = false;
        self.resolved = None;

        let reference = reference.trim();
        if reference.is_empty() {
            return;
        }
        if is_remote_reference(reference) {
            self.resolved = Some(ResolvedImage::Url(reference.to_string()));
            return;
        }

        // Anything else is a local file; sniff the header without reading
        // the whole file.
        match sniff_file(Path::new(reference)) {
            Ok((kind, len)) => {
                self.resolved = Some(ResolvedImage::File {
                    path: PathBuf::from(reference),
                    kind,
                    len,
                });
            }
            Err(_) => self.load_failed = true,
        }
    }

    pub fn reset(&mut self) {
        self.resolved = None;
        self.load_failed = false;
    }
}

pub fn is_remote_reference(reference: &str) -> bool {
    reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("data:")
}

fn sniff_file(path: &Path) -> Result<(ImageKind, u64)> {
    let mut file = std::fs::File::open(path)?;
    let len = file.metadata()?.len();
    let mut header = [0u8; SNIFF_LEN];
    let read = file.read(&mut header)?;
    ImageKind::sniff(&header[..read])
        .map(|kind| (kind, len))
        .ok_or_else(|| anyhow!("{} is not a supported image file", path.display()))
}

/// Read a local image file and embed it as a self-contained data URI.
pub async fn embed_file(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let kind = ImageKind::sniff(&bytes)
        .ok_or_else(|| anyhow!("{} is not a supported image file", path.display()))?;
    Ok(format!(
        "data:{};base64,{}",
        kind.mime(),
        STANDARD.encode(&bytes)
    ))
}

/// Resolve the submitted image reference: URLs pass through unchanged,
/// local files are embedded.
pub async fn resolve_reference(reference: &str) -> Result<String> {
    if is_remote_reference(reference) {
        Ok(reference.to_string())
    } else {
        embed_file(Path::new(reference)).await
    }
}
