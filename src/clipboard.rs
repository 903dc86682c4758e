use clipboard::{ClipboardContext, ClipboardProvider};
use log::{debug, warn};

/// Somewhere a password can be copied to. Writes are fire-and-forget.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// The host's clipboard. The context is opened on first use so a session
/// without a display still starts.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard::default()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) {
        if self.ctx.is_none() {
            match ClipboardProvider::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(err) => {
                    warn!("clipboard unavailable: {}", err);
                    return;
                }
            }
        }
        if let Some(ctx) = self.ctx.as_mut() {
            match ctx.set_contents(text.to_string()) {
                Ok(()) => debug!("copied {} chars to clipboard", text.len()),
                Err(err) => warn!("clipboard write failed: {}", err),
            }
        }
    }
}

/// Keeps everything written to it. Used by tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    pub written: Vec<String>,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) {
        self.written.push(text.to_string());
    }
}
