//! Reckon: a synchronous calculator engine with a bounded history ledger.
//!
//! Reckon follows a "pure core, imperative shell" split: the engine is
//! the core, a finite-state interpreter over discrete user inputs with
//! no I/O, no concurrency, and no panics. The presentation layer is the
//! shell that drives it one input at a time and renders the exposed
//! state.
//!
//! # Core Concepts
//!
//! - **Operand**: a number as its canonical display string, including
//!   the `"Error"` sentinel left by failed computations
//! - **Engine**: the [`Calculator`] state machine interpreting digits,
//!   operators, unary functions, and memory commands
//! - **Ledger**: the capacity-bounded, newest-first history of completed
//!   calculations
//!
//! # Example
//!
//! ```rust
//! use reckon::{BinaryOp, Calculator, UnaryOp};
//!
//! let mut calculator = Calculator::new();
//!
//! // 7 + 3 × 2 = evaluates left-to-right: (7 + 3) × 2 = 20
//! calculator.enter_digit('7');
//! calculator.enter_binary_op(BinaryOp::Add);
//! calculator.enter_digit('3');
//! calculator.enter_binary_op(BinaryOp::Multiply);
//! calculator.enter_digit('2');
//! calculator.evaluate_equals();
//! assert_eq!(calculator.current(), "20");
//!
//! // every completed evaluation lands in the ledger, newest first
//! calculator.enter_unary_op(UnaryOp::Sqrt);
//! let entries = calculator.ledger().entries();
//! assert_eq!(entries[0].expression, "√(20)");
//! assert_eq!(entries[1].expression, "10 × 2");
//! assert_eq!(entries[2].expression, "7 + 3");
//! ```

pub mod engine;
pub mod ledger;
pub mod snapshot;

// Re-export commonly used types
pub use engine::{AngleUnit, BinaryOp, Calculator, Constant, EngineState, Operand, UnaryOp};
pub use ledger::{HistoryEntry, Ledger};
pub use snapshot::{DisplaySnapshot, LedgerEntryView};
