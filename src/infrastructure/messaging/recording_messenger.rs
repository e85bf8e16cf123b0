use std::sync::Mutex;

use crate::application::ports::Messenger;

/// Captures notices so tests can assert on them.
#[derive(Default)]
pub struct RecordingMessenger {
    notices: Mutex<Vec<String>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }
}

impl Messenger for RecordingMessenger {
    fn notify(&self, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(message.to_string());
        }
    }
}
