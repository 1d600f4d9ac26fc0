use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait ClipboardFacade: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Best-effort copy. Any failure is logged and reported as `false`; it never propagates.
pub fn copy_to_clipboard(clipboard: &dyn ClipboardFacade, text: &str) -> bool {
    match clipboard.set_text(text) {
        Ok(()) => {
            tracing::debug!(chars = text.chars().count(), "copied to clipboard");
            true
        }
        Err(err) => {
            tracing::debug!(error = %err, "clipboard copy failed");
            false
        }
    }
}
