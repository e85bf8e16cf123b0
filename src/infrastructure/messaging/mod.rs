mod console_messenger;
mod recording_messenger;

pub use console_messenger::ConsoleMessenger;
pub use recording_messenger::RecordingMessenger;
