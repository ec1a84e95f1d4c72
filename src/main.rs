use std::{env, fs, process};

use tracing::debug;
use tracing_subscriber::EnvFilter;

use playground_debugger::adapter;
use playground_debugger::error::Result;
use playground_debugger::examples;
use playground_debugger::executor::{self, Pacing};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let adapter_mode = args
        .iter()
        .any(|arg| arg == "--adapter" || arg == "--debug-adapter");
    let pacing = if args.iter().any(|arg| arg == "--no-pacing") {
        Pacing::none()
    } else {
        Pacing::simulated()
    };

    debug!(?args, adapter_mode, "starting");

    if adapter_mode {
        return adapter::run_adapter_mode(pacing);
    }

    let source = load_source(&args)?;
    executor::run_interactive(&source, pacing)?;
    Ok(())
}

fn load_source(args: &[String]) -> Result<String> {
    if let Some(pos) = args.iter().position(|arg| arg == "--example") {
        let name = args.get(pos + 1).map(String::as_str).unwrap_or_default();
        match examples::find_example(name) {
            Some(example) => return Ok(example.code.to_string()),
            None => {
                eprintln!("Unknown example '{name}'. Available:");
                for example in examples::EXAMPLES {
                    eprintln!("  {}", example.name);
                }
                process::exit(2);
            }
        }
    }

    if let Some(path) = args.iter().find(|arg| !arg.starts_with("--")) {
        return Ok(fs::read_to_string(path)?);
    }

    Ok(examples::default_program().to_string())
}
