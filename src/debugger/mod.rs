mod breakpoints;
mod graph;
mod session;
mod stepping;
mod steps;

pub use breakpoints::Breakpoints;
pub use graph::{snapshot as graph_snapshot, GraphEdge, GraphNode, GraphSnapshot, NodeKind};
pub use session::{DebugSession, Debugger, StateSnapshot, ROOT_FRAME};
pub use stepping::DebugAction;
pub use steps::{generate, DebugStep, Variable, ACCUMULATOR_VAR, COUNTER_VAR, FIBONACCI};
