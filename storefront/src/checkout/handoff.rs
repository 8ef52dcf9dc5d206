//! Chat handoff
//!
//! Builds the pre-filled `wa.me` link and hands it to a [`ChatLauncher`].

use parking_lot::Mutex;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const CHAT_BASE_URL: &str = "https://wa.me";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Fixed chat destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatHandoff {
    destination: String,
}

impl ChatHandoff {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// `https://wa.me/<destination>?text=<encoded message>`
    pub fn link(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            CHAT_BASE_URL,
            self.destination,
            utf8_percent_encode(message, MESSAGE_ENCODE_SET)
        )
    }
}

/// Opens a chat link somewhere the buyer can act on it
pub trait ChatLauncher: Send + Sync {
    fn launch(&self, url: &str) -> std::io::Result<()>;
}

/// Opens the link with the system browser
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLauncher;

impl ChatLauncher for BrowserLauncher {
    fn launch(&self, url: &str) -> std::io::Result<()> {
        tracing::info!(url = %url, "Opening chat link");
        open::that(url)
    }
}

/// Prints the link to stdout instead of opening it
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintLauncher;

impl ChatLauncher for PrintLauncher {
    fn launch(&self, url: &str) -> std::io::Result<()> {
        println!("{}", url);
        Ok(())
    }
}

/// Keeps every launched link; used by tests and dry runs
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    launched: Mutex<Vec<String>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn launched(&self) -> Vec<String> {
        self.launched.lock().clone()
    }
}

impl ChatLauncher for RecordingLauncher {
    fn launch(&self, url: &str) -> std::io::Result<()> {
        self.launched.lock().push(url.to_string());
        Ok(())
    }
}
