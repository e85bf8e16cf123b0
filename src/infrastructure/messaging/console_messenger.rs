use crate::application::ports::Messenger;

/// Prints notices to stderr; stdout is reserved for extracted text.
pub struct ConsoleMessenger;

impl Messenger for ConsoleMessenger {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}
