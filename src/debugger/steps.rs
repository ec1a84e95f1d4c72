use serde::Serialize;
use serde_json::{json, Value};

use super::breakpoints::Breakpoints;
use crate::parser::{assignment_target, scan_lines};

/// The ten values the simulation hands out for the default example.
pub const FIBONACCI: [i64; 10] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34];

/// Name of the simulated loop counter.
pub const COUNTER_VAR: &str = "i";
/// Name of the simulated accumulator.
pub const ACCUMULATOR_VAR: &str = "result";

const COUNTER_LINE_THRESHOLD: u32 = 3;
const ACCUMULATOR_LINE_THRESHOLD: u32 = 5;
const COUNTER_MAX: i64 = 9;

/// One tracked variable as shown to the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: Value,
}

impl Variable {
    pub fn number(name: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            ty: "number".to_string(),
            value: json!(value),
        }
    }
}

/// One position the debugger can pause at, with the variable table frozen at
/// that point. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugStep {
    pub line: u32,
    pub variables: Vec<Variable>,
}

/// The fixed simulated variable table. Assignments to the counter and the
/// accumulator move it according to crude line heuristics; nothing is ever
/// evaluated.
#[derive(Debug, Clone, Copy)]
struct SimulatedVars {
    counter: i64,
    accumulator: i64,
}

impl SimulatedVars {
    fn seed() -> Self {
        Self {
            counter: 0,
            accumulator: 0,
        }
    }

    /// Apply the update rule for an assignment-looking line. The counter
    /// increments past its line threshold, saturating at [`COUNTER_MAX`]; the
    /// accumulator follows the precomputed Fibonacci table indexed by the
    /// counter. An approximation by design, not evaluation.
    fn apply(&mut self, target: &str, line: u32) {
        if target == COUNTER_VAR && line > COUNTER_LINE_THRESHOLD {
            self.counter = (self.counter + 1).min(COUNTER_MAX);
        } else if target == ACCUMULATOR_VAR && line > ACCUMULATOR_LINE_THRESHOLD {
            self.accumulator = if self.counter <= 1 {
                self.counter
            } else {
                FIBONACCI[self.counter as usize]
            };
        }
    }

    fn table(&self) -> Vec<Variable> {
        vec![
            Variable::number(COUNTER_VAR, self.counter),
            Variable::number(ACCUMULATOR_VAR, self.accumulator),
        ]
    }
}

/// Build the ordered step sequence for a source text and breakpoint set.
///
/// Never fails: an empty or whitespace-only source yields a single synthetic
/// step at line 1 with the seed table. Steps come back sorted by ascending
/// line with no duplicate line numbers, and every breakpoint line is
/// guaranteed a step.
pub fn generate(source: &str, breakpoints: &Breakpoints) -> Vec<DebugStep> {
    let mut vars = SimulatedVars::seed();
    let mut steps: Vec<DebugStep> = Vec::new();

    for line in scan_lines(source) {
        if let Some(target) = assignment_target(&line.text) {
            vars.apply(target, line.number);
        }
        steps.push(DebugStep {
            line: line.number,
            variables: vars.table(),
        });
    }

    // Every session has a step at line 1.
    if steps.first().map(|s| s.line) != Some(1) {
        steps.insert(
            0,
            DebugStep {
                line: 1,
                variables: SimulatedVars::seed().table(),
            },
        );
    }

    // Breakpoint lines without a natural step get a synthetic one, copying
    // the table of the nearest preceding step. Ascending order keeps the
    // synthesis deterministic.
    for bp in breakpoints.to_sorted_vec() {
        if bp < 1 || steps.iter().any(|s| s.line == bp) {
            continue;
        }
        let variables = nearest_preceding(&steps, bp)
            .map(|s| s.variables.clone())
            .unwrap_or_else(|| SimulatedVars::seed().table());
        steps.push(DebugStep {
            line: bp,
            variables,
        });
    }

    steps.sort_by_key(|s| s.line);
    steps
}

/// Closest generated step strictly before `line`, scanning backward to 1.
fn nearest_preceding(steps: &[DebugStep], line: u32) -> Option<&DebugStep> {
    (1..line)
        .rev()
        .find_map(|candidate| steps.iter().find(|s| s.line == candidate))
}
