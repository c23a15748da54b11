//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::{EvaluateError, EvaluationResult, evaluate_codes};
pub use simple::run_simple;
