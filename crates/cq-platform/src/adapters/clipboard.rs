//! System clipboard adapter backed by `clipboard-rs`.
//! 基于 clipboard-rs 的系统剪贴板适配器。

use std::sync::Mutex;

use anyhow::anyhow;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tracing::debug;

use cq_core::ports::{ClipboardError, ClipboardPort};

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

fn map_clipboard_err<T>(result: Result<T, BoxedError>) -> Result<T, ClipboardError> {
    result.map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

/// Text access to the OS clipboard.
///
/// The context is created once and kept for the process lifetime: on X11
/// the owning context must stay alive for written content to remain
/// available to other applications.
pub struct SystemClipboard {
    inner: Mutex<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> anyhow::Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("ClipboardContext::new failed: {e}"))?;
        Ok(Self {
            inner: Mutex::new(context),
        })
    }

    fn with_context<T>(
        &self,
        f: impl FnOnce(&ClipboardContext) -> Result<T, ClipboardError>,
    ) -> Result<T, ClipboardError> {
        let ctx = self
            .inner
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard context poisoned".into()))?;
        f(&ctx)
    }
}

impl ClipboardPort for SystemClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        self.with_context(|ctx| {
            if !ctx.has(ContentFormat::Text) {
                debug!("Clipboard has no text representation");
                return Err(ClipboardError::Empty);
            }
            map_clipboard_err(ctx.get_text())
        })
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.with_context(|ctx| map_clipboard_err(ctx.set_text(text.to_string())))
    }
}
