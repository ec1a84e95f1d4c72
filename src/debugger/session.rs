use serde::Serialize;
use tracing::debug;

use super::breakpoints::Breakpoints;
use super::graph::{self, GraphSnapshot};
use super::stepping::DebugAction;
use super::steps::{generate, DebugStep, Variable, COUNTER_VAR};

/// Label of the frame every session starts with and never loses.
pub const ROOT_FRAME: &str = "main()";

/// What a UI polls after every action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub line: u32,
    pub variables: Vec<Variable>,
    pub call_stack: Vec<String>,
    pub graph: GraphSnapshot,
    pub paused: bool,
    pub terminated: bool,
}

/// One live debug session: the generated step sequence plus the cursor,
/// pause flags, and call stack that navigation operations mutate.
///
/// The step sequence is never empty, so the cursor is always a valid index.
#[derive(Debug)]
pub struct DebugSession {
    steps: Vec<DebugStep>,
    cursor: usize,
    paused: bool,
    terminated: bool,
    call_stack: Vec<String>,
    breakpoints: Vec<u32>,
}

impl DebugSession {
    /// Trace the source once and pause at the first step.
    pub fn new(source: &str, breakpoints: &Breakpoints) -> Self {
        let steps = generate(source, breakpoints);
        debug!(steps = steps.len(), "debug session created");
        Self {
            steps,
            cursor: 0,
            paused: true,
            terminated: false,
            call_stack: vec![ROOT_FRAME.to_string()],
            breakpoints: breakpoints.to_sorted_vec(),
        }
    }

    pub fn current(&self) -> &DebugStep {
        &self.steps[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn call_stack(&self) -> &[String] {
        &self.call_stack
    }

    /// Move to the next step whose line carries a breakpoint. `None` means
    /// the session ran to completion: the cursor stays put and the caller
    /// decides whether to stop.
    pub fn resume(&mut self) -> Option<&DebugStep> {
        let next = (self.cursor + 1..self.steps.len())
            .find(|&idx| self.breakpoints.binary_search(&self.steps[idx].line).is_ok())?;
        self.cursor = next;
        Some(self.current())
    }

    /// Advance one step without touching the call stack.
    pub fn step_over(&mut self) -> &DebugStep {
        self.cursor = (self.cursor + 1).min(self.steps.len() - 1);
        self.current()
    }

    /// Advance one step and descend into a synthetic call frame.
    pub fn step_into(&mut self) -> &DebugStep {
        self.cursor = (self.cursor + 1).min(self.steps.len() - 1);
        let frame = self.synthetic_frame();
        self.call_stack.push(frame);
        self.current()
    }

    /// Skip ahead up to three steps and pop the top frame. The root frame is
    /// never popped.
    pub fn step_out(&mut self) -> &DebugStep {
        self.cursor = (self.cursor + 3).min(self.steps.len() - 1);
        if self.call_stack.len() > 1 {
            self.call_stack.pop();
        }
        self.current()
    }

    /// Rewind to the first step without regenerating the sequence.
    pub fn restart(&mut self) -> &DebugStep {
        self.cursor = 0;
        self.call_stack.clear();
        self.call_stack.push(ROOT_FRAME.to_string());
        self.current()
    }

    /// Mark the session dead. Called right before the owner drops it.
    pub fn terminate(&mut self) {
        self.paused = false;
        self.terminated = true;
    }

    pub fn snapshot(&self) -> StateSnapshot {
        let step = self.current();
        StateSnapshot {
            line: step.line,
            variables: step.variables.clone(),
            call_stack: self.call_stack.clone(),
            graph: graph::snapshot(self.progress()),
            paused: self.paused,
            terminated: self.terminated,
        }
    }

    /// Fraction of the step sequence behind the cursor.
    fn progress(&self) -> f64 {
        self.cursor as f64 / self.steps.len() as f64
    }

    /// Frame label for a simulated call, derived from the counter variable at
    /// the current step.
    fn synthetic_frame(&self) -> String {
        let counter = self
            .current()
            .variables
            .iter()
            .find(|v| v.name == COUNTER_VAR)
            .and_then(|v| v.value.as_i64())
            .unwrap_or(0);
        format!("fibonacci({counter})")
    }
}

/// Caller-owned coordinator: the breakpoint set plus at most one live
/// session. All navigation goes through here; operations without an active
/// session are no-ops returning `None`.
#[derive(Debug, Default)]
pub struct Debugger {
    breakpoints: Breakpoints,
    session: Option<DebugSession>,
}

impl Debugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over `source`, discarding any existing one.
    pub fn start(&mut self, source: &str) -> StateSnapshot {
        if self.session.is_some() {
            debug!("discarding previous debug session");
        }
        let session = DebugSession::new(source, &self.breakpoints);
        let snapshot = session.snapshot();
        self.session = Some(session);
        snapshot
    }

    /// Apply a navigation action to the active session.
    pub fn navigate(&mut self, action: DebugAction) -> Option<StateSnapshot> {
        if matches!(action, DebugAction::Stop) {
            self.stop();
            return None;
        }

        let session = self.session.as_mut()?;
        match action {
            DebugAction::Continue => {
                session.resume()?;
            }
            DebugAction::StepOver => {
                session.step_over();
            }
            DebugAction::StepInto => {
                session.step_into();
            }
            DebugAction::StepOut => {
                session.step_out();
            }
            DebugAction::Restart => {
                session.restart();
            }
            // Handled by the early return above.
            DebugAction::Stop => return None,
        }
        Some(session.snapshot())
    }

    /// Terminate and destroy the active session, if any.
    pub fn stop(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.terminate();
            debug!("debug session stopped");
        }
    }

    /// Stop when a session is active, start one otherwise.
    pub fn toggle_debugging(&mut self, source: &str) -> Option<StateSnapshot> {
        if self.session.is_some() {
            self.stop();
            None
        } else {
            Some(self.start(source))
        }
    }

    /// Toggle one breakpoint line; returns the sorted current set.
    ///
    /// Sessions keep the breakpoint set they were started with; toggles take
    /// effect on the next `start`.
    pub fn toggle_breakpoint(&mut self, line: u32) -> Vec<u32> {
        self.breakpoints.toggle(line);
        self.breakpoints.to_sorted_vec()
    }

    /// Replace the whole breakpoint set; returns the sorted current set.
    pub fn set_breakpoints(&mut self, lines: &[u32]) -> Vec<u32> {
        self.breakpoints.clear();
        for &line in lines {
            self.breakpoints.add(line);
        }
        self.breakpoints.to_sorted_vec()
    }

    pub fn breakpoints(&self) -> Vec<u32> {
        self.breakpoints.to_sorted_vec()
    }

    pub fn is_debugging(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.session.as_ref().is_some_and(DebugSession::is_paused)
    }

    /// Snapshot of the active session, if any.
    pub fn current(&self) -> Option<StateSnapshot> {
        self.session.as_ref().map(DebugSession::snapshot)
    }

    pub fn session(&self) -> Option<&DebugSession> {
        self.session.as_ref()
    }
}
