pub mod codec;
pub mod config;
pub mod dates;
pub mod entry;
pub mod error;
pub mod journal;
pub mod prompts;
pub mod render;

pub use config::Config;
pub use entry::JournalEntry;
pub use error::JournalError;
pub use journal::{Journal, LoadReport};
pub use prompts::random_prompt;
