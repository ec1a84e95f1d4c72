mod commands;
mod lines;
mod types;

pub use commands::{assignment_target, is_comment, is_fib_loop_header, parse_print, FIB_LOOP_HEADER};
pub use lines::{line_text, scan_lines};
pub use types::SourceLine;
