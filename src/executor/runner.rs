use crate::debugger::{Debugger, FIBONACCI};
use crate::parser::{is_fib_loop_header, parse_print};

/// Fixed reply for the run path while a debug session is live.
pub const DEBUGGING_NOTICE: &str =
    "Debugger started. Use the debug controls to step through the code.";

/// Simulated "run" output for a source text.
///
/// Line-pattern recognition only, applied top to bottom: `print(...)` lines
/// emit their extracted text, the hard-coded Fibonacci loop emits its header
/// and the ten values, everything else emits nothing. Unrecognized sources
/// produce the empty string; this never fails.
pub fn run(source: &str) -> String {
    let mut output: Vec<String> = Vec::new();
    let calls_fibonacci = source.contains("fibonacci(i)");

    for raw in source.lines() {
        let line = raw.trim();

        if let Some(text) = parse_print(line) {
            output.push(text);
            continue;
        }

        // A recognizer for one example program, not a loop evaluator.
        if is_fib_loop_header(line) && calls_fibonacci {
            output.push("Fibonacci Sequence:".to_string());
            for value in FIBONACCI {
                output.push(value.to_string());
            }
        }
    }

    output.join("\n")
}

/// Run path used by the drivers: a live debug session takes priority over
/// simulated execution.
pub fn execute(debugger: &Debugger, source: &str) -> String {
    if debugger.is_debugging() {
        DEBUGGING_NOTICE.to_string()
    } else {
        run(source)
    }
}
