//! Configuration

mod generate;
mod websmith;

pub use generate::{FormatOptions, GenerateOptions, IndentChar, LineEnding};
pub use websmith::{WebsmithConfig, WEBSMITH_CONFIG_FILE};
