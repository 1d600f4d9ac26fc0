use crate::domain::clipboard::{ClipboardError, ClipboardFacade};
use std::sync::Mutex;

/// OS clipboard backed by `arboard`.
///
/// The handle is opened on first use and kept for the process lifetime, since
/// some platforms drop clipboard contents together with the owning handle.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardFacade for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard handle poisoned".to_string()))?;

        if guard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            *guard = Some(clipboard);
        }

        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::Write(e.to_string())),
            None => Err(ClipboardError::Unavailable(
                "clipboard not initialized".to_string(),
            )),
        }
    }
}

/// A clipboard that always fails, used when the terminal has no clipboard backend.
pub struct NoClipboard;

impl ClipboardFacade for NoClipboard {
    fn set_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard backend".to_string()))
    }
}
