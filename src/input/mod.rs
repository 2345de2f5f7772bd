mod helper;
pub mod reader;

pub use helper::ShellHelper;
pub use reader::{LineReader, RustylineReader};
