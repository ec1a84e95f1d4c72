//! A simulated code-playground backend: a mock step-debugger session state
//! machine plus a pattern-matching "run" stub.
//!
//! Nothing in this crate interprets code. "Execution" output comes from line
//! pattern recognition, the variable tables are fabricated by documented
//! heuristics, and the structure graph is a pure function of session
//! progress. The state machine around those fabrications — breakpoints,
//! step granularity, call-stack tracking, session lifecycle — is real and is
//! what this crate is for.

pub mod adapter;
pub mod debugger;
pub mod error;
pub mod examples;
pub mod executor;
pub mod parser;

pub use error::{Error, Result};
