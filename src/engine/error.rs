//! Evaluation errors for calculator operations.

use thiserror::Error;

/// Errors produced while evaluating an operation.
///
/// These never escape the engine: every public operation is total, and
/// evaluation failures collapse to the `"Error"` sentinel operand.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{function} is undefined for {argument}")]
    DomainViolation {
        function: &'static str,
        argument: f64,
    },
}
