//! Resource link validation for the external opener.
//!
//! # Responsibility
//! - Turn an entry's PDF path or video link into an openable target.
//! - Refuse empty or invalid targets with a user-facing warning instead.
//!
//! # Invariants
//! - A `LocalFile` target points at a path that existed at resolve time.
//! - A `WebLink` target starts with `http://` or `https://`.

use crate::model::entry::Entry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

static WEB_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://").expect("valid web link regex"));

/// Which attached resource to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Pdf,
    Video,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => f.write_str("PDF"),
            Self::Video => f.write_str("video"),
        }
    }
}

/// Validated target safe to hand to the platform opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceTarget {
    LocalFile(PathBuf),
    WebLink(String),
}

impl ResourceTarget {
    /// `file://` URI for local files (absolute when resolvable), URL otherwise.
    pub fn display_uri(&self) -> String {
        match self {
            Self::LocalFile(path) => {
                let absolute = path.canonicalize().unwrap_or_else(|_| path.clone());
                format!("file://{}", absolute.display())
            }
            Self::WebLink(url) => url.clone(),
        }
    }
}

/// Reason a resource cannot be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The entry has no resource of this kind.
    Missing(ResourceKind),
    FileNotFound(PathBuf),
    InvalidLink(String),
}

impl Display for ResourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(kind) => write!(f, "this entry has no {kind} attached"),
            Self::FileNotFound(path) => write!(
                f,
                "the PDF file was not found at the specified path: {}",
                path.display()
            ),
            Self::InvalidLink(link) => write!(f, "the video link is not a valid URL: {link}"),
        }
    }
}

impl Error for ResourceError {}

/// Resolves the requested resource of `entry`.
pub fn resolve(entry: &Entry, kind: ResourceKind) -> Result<ResourceTarget, ResourceError> {
    match kind {
        ResourceKind::Pdf => resolve_pdf(entry),
        ResourceKind::Video => resolve_video(entry),
    }
}

/// Resolves the PDF path; the file must currently exist.
pub fn resolve_pdf(entry: &Entry) -> Result<ResourceTarget, ResourceError> {
    if !entry.has_pdf() {
        return Err(ResourceError::Missing(ResourceKind::Pdf));
    }
    let path = Path::new(&entry.pdf_path);
    if !path.exists() {
        return Err(ResourceError::FileNotFound(path.to_path_buf()));
    }
    Ok(ResourceTarget::LocalFile(path.to_path_buf()))
}

/// Resolves the video link; only `http(s)` URLs are accepted.
pub fn resolve_video(entry: &Entry) -> Result<ResourceTarget, ResourceError> {
    if !entry.has_video() {
        return Err(ResourceError::Missing(ResourceKind::Video));
    }
    if !WEB_LINK_RE.is_match(&entry.video_link) {
        return Err(ResourceError::InvalidLink(entry.video_link.clone()));
    }
    Ok(ResourceTarget::WebLink(entry.video_link.clone()))
}
