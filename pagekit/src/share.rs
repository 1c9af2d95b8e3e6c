//! Native share with clipboard fallback.
//!
//! The platform seam is two traits: a native share surface and a clipboard.
//! When the platform has no share surface the URL is copied instead and a
//! toast confirms it. A dismissed share dialog stays silent; real failures
//! are logged, never propagated.

use std::sync::Mutex;
use std::time::Instant;

use thiserror::Error;

use crate::toast::Toasts;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum ShareError {
    /// The platform has no native share surface.
    #[error("share is not supported on this platform")]
    Unsupported,
    /// The user dismissed the share dialog.
    #[error("share was aborted")]
    Aborted,
    #[error("share failed: {0}")]
    Failed(String),
}

/// Platform-native share surface.
pub trait ShareTarget {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Platform clipboard.
pub trait Clipboard {
    fn set_text(&self, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Delivered through the native share surface.
    Shared,
    /// No native surface; the URL went to the clipboard.
    Copied,
    /// The user dismissed the dialog.
    Dismissed,
    /// Share and fallback both failed (already logged).
    Failed,
}

/// Share through the native surface, falling back to copying the URL to the
/// clipboard with a confirmation toast.
pub fn share(
    request: &ShareRequest,
    target: &dyn ShareTarget,
    clipboard: &dyn Clipboard,
    toasts: &mut Toasts,
    now: Instant,
) -> ShareOutcome {
    match target.share(request) {
        Ok(()) => ShareOutcome::Shared,
        Err(ShareError::Aborted) => ShareOutcome::Dismissed,
        Err(ShareError::Unsupported) => match clipboard.set_text(&request.url) {
            Ok(()) => {
                toasts.show("Link copied to clipboard!", now);
                ShareOutcome::Copied
            }
            Err(e) => {
                log::error!("copy failed: {e}");
                ShareOutcome::Failed
            }
        },
        Err(e) => {
            log::error!("share failed: {e}");
            ShareOutcome::Failed
        }
    }
}

/// Platform without a native share surface.
#[derive(Debug, Default)]
pub struct NoNativeShare;

impl ShareTarget for NoNativeShare {
    fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }
}

/// In-memory clipboard for tests and headless embedders.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ShareError> {
        *self
            .contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text.to_string());
        Ok(())
    }
}
