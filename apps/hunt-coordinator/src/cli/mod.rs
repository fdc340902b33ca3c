//! Line-oriented game-master console over stdin.

pub mod console;
pub mod render;

pub use console::{parse_line, run_console, ConsoleCommand};
