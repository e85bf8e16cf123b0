pub mod shell_words;

mod mock_text_extractor;
mod tika_command;
mod tika_extractor;
mod tika_path_validator;

pub use mock_text_extractor::MockTextExtractor;
pub use tika_command::TikaCommand;
pub use tika_extractor::TikaExtractor;
pub use tika_path_validator::{SelfCheck, TikaPathValidator};
