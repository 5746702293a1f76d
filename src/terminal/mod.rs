//! Terminal front end: reads commands, forwards them to the engine, and
//! prints the board and status lines.

mod input;
mod render;
mod session;

pub use input::{Command, HELP, parse_command};
pub use render::{render_board, result_line, turn_line};
pub use session::{AdapterError, Session};
