use std::io::{self, BufRead, Write};

use tracing::debug;

use super::{execute, Pacing};
use crate::debugger::{DebugAction, Debugger, StateSnapshot, Variable};
use crate::parser::line_text;

/// Interactive prompt loop driving one debugger over a fixed source text.
pub fn run_interactive(source: &str, pacing: Pacing) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let mut debugger = Debugger::new();

    list_source(source);

    'prompt: loop {
        eprintln!("\nCommands: (r)un, (d)ebug on/off, (c)ontinue, (n)ext/stepOver, (s)tepIn, (o)ut/stepOut, restart, stop, (b) <line>, (l)ist, (q)uit");
        eprint!("> ");
        io::stderr().flush()?;

        let raw = match input.next() {
            Some(line) => line?,
            None => break 'prompt,
        };

        let tokens = shlex::split(raw.trim()).unwrap_or_default();
        let Some(command) = tokens.first().map(String::as_str) else {
            continue;
        };

        match command {
            "r" | "run" => {
                pacing.pause_for_run();
                let output = execute(&debugger, source);
                if output.is_empty() {
                    eprintln!("(no output)");
                } else {
                    println!("{output}");
                }
            }
            "d" | "debug" => match debugger.toggle_debugging(source) {
                Some(snapshot) => print_stop(source, &snapshot),
                None => eprintln!("⏹  Debug session ended"),
            },
            "b" | "break" => match tokens.get(1).and_then(|t| t.parse::<u32>().ok()) {
                Some(line) => {
                    let set = debugger.toggle_breakpoint(line);
                    eprintln!("Breakpoints: {set:?}");
                }
                None => eprintln!("❌ Invalid line number"),
            },
            "l" | "list" => list_source(source),
            "q" | "quit" => break 'prompt,
            other => {
                let Some(action) = parse_action(other) else {
                    eprintln!("❓ Unknown command: {other}");
                    continue;
                };
                if !debugger.is_debugging() {
                    eprintln!("No active debug session (use 'd' to start one)");
                    continue;
                }
                debug!(action = action.as_str(), "navigating");
                pacing.pause_for_step();
                match debugger.navigate(action) {
                    Some(snapshot) => print_stop(source, &snapshot),
                    None if action == DebugAction::Stop => {
                        eprintln!("⏹  Debug session stopped");
                    }
                    None => {
                        // Continue past the last breakpoint: the session ran
                        // to completion and this driver chooses to stop it.
                        eprintln!("▶️  No more breakpoints ahead; session ran to completion");
                        debugger.navigate(DebugAction::Stop);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Prompt shorthands on top of the wire spellings.
fn parse_action(command: &str) -> Option<DebugAction> {
    match command {
        "c" => Some(DebugAction::Continue),
        "n" => Some(DebugAction::StepOver),
        "s" => Some(DebugAction::StepInto),
        "o" | "out" => Some(DebugAction::StepOut),
        other => DebugAction::parse(other),
    }
}

fn print_stop(source: &str, snapshot: &StateSnapshot) {
    eprintln!("\n🔍 Paused at line {}", snapshot.line);
    if let Some(text) = line_text(source, snapshot.line) {
        eprintln!("    {text}");
    }
    print_variables(&snapshot.variables);
    print_call_stack(&snapshot.call_stack);
    eprintln!(
        "    graph: {} nodes, {} edges",
        snapshot.graph.nodes.len(),
        snapshot.graph.edges.len()
    );
}

fn print_variables(variables: &[Variable]) {
    if variables.is_empty() {
        return;
    }
    eprintln!("\n=== Variables ===");
    for var in variables {
        eprintln!("  {} = {} ({})", var.name, var.value, var.ty);
    }
}

fn print_call_stack(frames: &[String]) {
    eprintln!("\n=== Call Stack ({} frames) ===", frames.len());
    for (i, frame) in frames.iter().enumerate().rev() {
        eprintln!("  #{i}: {frame}");
    }
    eprintln!();
}

fn list_source(source: &str) {
    eprintln!("\n=== Source ===");
    for (idx, line) in source.lines().enumerate() {
        eprintln!("{:>4} | {line}", idx + 1);
    }
}
