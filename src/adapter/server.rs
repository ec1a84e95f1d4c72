use std::io::{self, BufRead, Read, Write};

use serde_json::{json, Value};
use tracing::{debug, warn};

use super::protocol::{WireContent, WireMessage};
use crate::debugger::{DebugAction, Debugger};
use crate::error::{Error, Result};
use crate::executor::{execute, Pacing};

/// Serves the `{code} -> {result}` exchange and the debug-session commands
/// over Content-Length framed JSON messages.
pub struct AdapterServer {
    seq: u64,
    debugger: Debugger,
    pacing: Pacing,
}

impl AdapterServer {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            seq: 0,
            debugger: Debugger::new(),
            pacing,
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    pub fn send_response(
        &mut self,
        request_seq: u64,
        command: String,
        success: bool,
        message: Option<String>,
        body: Option<Value>,
    ) -> Result<()> {
        let msg = WireMessage {
            seq: self.next_seq(),
            msg_type: "response".to_string(),
            content: WireContent::Response {
                request_seq,
                success,
                command,
                message,
                body,
            },
        };
        self.send_message(&msg)
    }

    pub fn send_event(&mut self, event: &str, body: Option<Value>) -> Result<()> {
        let msg = WireMessage {
            seq: self.next_seq(),
            msg_type: "event".to_string(),
            content: WireContent::Event {
                event: event.to_string(),
                body,
            },
        };
        self.send_message(&msg)
    }

    fn send_message(&self, msg: &WireMessage) -> Result<()> {
        let json = serde_json::to_string(msg)?;
        let mut stdout = io::stdout().lock();
        write!(stdout, "Content-Length: {}\r\n\r\n{}", json.len(), json)?;
        stdout.flush()?;
        debug!(bytes = json.len(), "sent message");
        Ok(())
    }

    /// Read one framed message. `Ok(None)` is a clean EOF; a bad header or
    /// bad JSON is a transport error the caller may skip past.
    pub fn read_message<R: BufRead>(reader: &mut R) -> Result<Option<WireMessage>> {
        let mut content_length = 0usize;

        loop {
            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some(rest) = line.strip_prefix("Content-Length:") {
                content_length = rest
                    .trim()
                    .parse()
                    .map_err(|_| Error::Transport(format!("bad Content-Length header: {line}")))?;
            }
        }

        if content_length == 0 {
            return Err(Error::Transport("missing Content-Length header".to_string()));
        }

        let mut buffer = vec![0u8; content_length];
        reader.read_exact(&mut buffer)?;
        Ok(Some(serde_json::from_slice(&buffer)?))
    }

    /// Dispatch one request. Returns `false` when the client disconnects.
    pub fn handle_request(
        &mut self,
        seq: u64,
        command: String,
        arguments: Option<Value>,
    ) -> Result<bool> {
        match command.as_str() {
            "run" => self.handle_run(seq, command, arguments)?,
            "start" => self.handle_start(seq, command, arguments)?,
            "navigate" => self.handle_navigate(seq, command, arguments)?,
            "toggleBreakpoint" => self.handle_toggle_breakpoint(seq, command, arguments)?,
            "state" => self.handle_state(seq, command)?,
            "disconnect" => {
                self.send_response(seq, command, true, None, None)?;
                return Ok(false);
            }
            _ => {
                warn!(%command, "unsupported command");
                let message = format!("Error: unsupported command: {command}");
                self.send_response(seq, command, false, Some(message), None)?;
            }
        }
        Ok(true)
    }

    fn handle_run(&mut self, seq: u64, command: String, arguments: Option<Value>) -> Result<()> {
        let code = str_arg(&arguments, "code").unwrap_or_default();
        self.pacing.pause_for_run();
        let result = execute(&self.debugger, code);
        self.send_response(seq, command, true, None, Some(json!({ "result": result })))
    }

    fn handle_start(&mut self, seq: u64, command: String, arguments: Option<Value>) -> Result<()> {
        let code = str_arg(&arguments, "code").unwrap_or_default();
        let breakpoints = u32_array_arg(&arguments, "breakpoints");
        self.debugger.set_breakpoints(&breakpoints);

        let snapshot = self.debugger.start(code);
        let body = serde_json::to_value(&snapshot)?;
        self.send_response(seq, command, true, None, Some(body))
    }

    fn handle_navigate(
        &mut self,
        seq: u64,
        command: String,
        arguments: Option<Value>,
    ) -> Result<()> {
        let Some(action) = str_arg(&arguments, "action").and_then(DebugAction::parse) else {
            let message = "Error: unknown navigate action".to_string();
            return self.send_response(seq, command, false, Some(message), None);
        };

        self.pacing.pause_for_step();
        let body = match self.debugger.navigate(action) {
            Some(snapshot) => Some(serde_json::to_value(&snapshot)?),
            None => None,
        };
        self.send_response(seq, command, true, None, body)?;

        if action == DebugAction::Stop {
            self.send_event("terminated", None)?;
        }
        Ok(())
    }

    fn handle_toggle_breakpoint(
        &mut self,
        seq: u64,
        command: String,
        arguments: Option<Value>,
    ) -> Result<()> {
        let Some(line) = u32_arg(&arguments, "line") else {
            let message = "Error: missing breakpoint line".to_string();
            return self.send_response(seq, command, false, Some(message), None);
        };
        let set = self.debugger.toggle_breakpoint(line);
        self.send_response(seq, command, true, None, Some(json!({ "breakpoints": set })))
    }

    fn handle_state(&mut self, seq: u64, command: String) -> Result<()> {
        let body = match self.debugger.current() {
            Some(snapshot) => Some(serde_json::to_value(&snapshot)?),
            None => None,
        };
        self.send_response(seq, command, true, None, body)
    }
}

fn str_arg<'a>(arguments: &'a Option<Value>, key: &str) -> Option<&'a str> {
    arguments.as_ref()?.get(key)?.as_str()
}

fn u32_arg(arguments: &Option<Value>, key: &str) -> Option<u32> {
    arguments
        .as_ref()?
        .get(key)?
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
}

fn u32_array_arg(arguments: &Option<Value>, key: &str) -> Vec<u32> {
    arguments
        .as_ref()
        .and_then(|v| v.get(key))
        .and_then(Value::as_array)
        .map(|lines| {
            lines
                .iter()
                .filter_map(Value::as_u64)
                .filter_map(|v| u32::try_from(v).ok())
                .collect()
        })
        .unwrap_or_default()
}
