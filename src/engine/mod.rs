//! The calculator engine: a finite-state input interpreter.
//!
//! The engine consumes discrete user inputs (digits, operators, unary
//! functions, memory commands) and maintains a running computed value
//! plus a bounded history of completed calculations. Every operation is
//! synchronous and total: nothing here returns an error or panics, and
//! evaluation failures collapse to the `"Error"` sentinel operand.
//!
//! Evaluation is strictly left-to-right with no operator precedence:
//! pressing an operator while another is pending (and a fresh right-hand
//! operand has been typed) evaluates the pending operation first.

mod error;
mod operation;
mod state;

pub use error::EvalError;
pub use operation::{BinaryOp, Constant, UnaryOp};
pub use state::{AngleUnit, EngineState, Operand, ERROR_SENTINEL};

use chrono::Utc;

use crate::ledger::{HistoryEntry, Ledger};
use crate::snapshot::{DisplaySnapshot, LedgerEntryView, SNAPSHOT_VERSION};

/// The calculator engine.
///
/// Owns the [`EngineState`] and the history [`Ledger`] for one session.
/// A presentation layer drives it by calling one operation per user
/// action and re-rendering from the observable state afterwards.
///
/// # Example
///
/// ```rust
/// use reckon::{BinaryOp, Calculator};
///
/// let mut calculator = Calculator::new();
/// calculator.enter_digit('6');
/// calculator.enter_binary_op(BinaryOp::Divide);
/// calculator.enter_digit('3');
/// calculator.evaluate_equals();
///
/// assert_eq!(calculator.current(), "2");
/// assert_eq!(calculator.ledger().latest().unwrap().expression, "6 ÷ 3");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: EngineState,
    ledger: Ledger,
}

impl Calculator {
    /// Create an engine in the session-start state.
    pub fn new() -> Self {
        Self {
            state: EngineState::new(),
            ledger: Ledger::new(),
        }
    }

    // ------------------------------------------------------------------
    // Input operations
    // ------------------------------------------------------------------

    /// Enter a digit `'0'`-`'9'` or the decimal point `'.'`.
    ///
    /// In overwrite mode the digit replaces the current operand (a lone
    /// `'.'` starts `"0."`). Otherwise it appends, rejecting a second
    /// decimal point and a redundant leading zero as silent no-ops.
    /// Anything other than a digit or `'.'` is ignored.
    pub fn enter_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() && digit != '.' {
            return;
        }

        if self.state.overwrite_next {
            self.state.current = if digit == '.' {
                Operand::from_text("0.")
            } else {
                Operand::from_text(digit.to_string())
            };
            self.state.overwrite_next = false;
            return;
        }

        // The sentinel blocks appending; it is exited via clear,
        // delete, or an overwriting re-entry.
        if self.state.current.is_error() {
            return;
        }

        if digit == '.' {
            if !self.state.current.has_decimal_point() {
                self.state.current.push('.');
            }
            return;
        }

        if self.state.current.is_zero_text() {
            if digit != '0' {
                self.state.current = Operand::from_text(digit.to_string());
            }
            return;
        }

        self.state.current.push(digit);
    }

    /// Select a binary operation.
    ///
    /// If an operation is already pending and a fresh right-hand operand
    /// has been typed, the pending operation is evaluated first (chained,
    /// left-to-right) and its result becomes the new left-hand operand;
    /// the completed sub-expression is recorded to history. Otherwise the
    /// current operand is promoted to `previous` without evaluation.
    ///
    /// No-op when the current operand is the `"Error"` sentinel. A
    /// division by zero during chaining aborts the chain: the newly
    /// pressed operator is not installed.
    pub fn enter_binary_op(&mut self, op: BinaryOp) {
        let Some(rhs) = self.state.current.value() else {
            return;
        };

        if let (Some(previous), Some(pending)) = (&self.state.previous, self.state.pending_op) {
            if !self.state.overwrite_next {
                let Some(lhs) = previous.value() else {
                    return;
                };
                match pending.apply(lhs, rhs) {
                    Ok(result) => {
                        let expression = format!(
                            "{} {} {}",
                            previous.as_str(),
                            pending.symbol(),
                            self.state.current.as_str()
                        );
                        let operand = Operand::from_value(result);
                        self.ledger = self.ledger.record(expression, operand.clone());
                        self.state.previous = Some(operand.clone());
                        self.state.current = operand;
                        self.state.pending_op = Some(op);
                        self.state.overwrite_next = true;
                    }
                    Err(_) => self.enter_error_state(),
                }
                return;
            }
        }

        self.state.previous = Some(self.state.current.clone());
        self.state.pending_op = Some(op);
        self.state.overwrite_next = true;
    }

    /// Apply a unary function to the current operand.
    ///
    /// Operates on `current` alone, independent of any pending binary
    /// operation. On success the result replaces `current`, a history
    /// entry is recorded with the function's expression template, and
    /// any pending binary context is cleared; the result stands alone
    /// and cannot be chained mid-expression. A domain violation leaves
    /// the `"Error"` sentinel and records nothing.
    pub fn enter_unary_op(&mut self, op: UnaryOp) {
        let Some(x) = self.state.current.value() else {
            return;
        };

        match op.apply(x, self.state.angle_unit) {
            Ok(result) => {
                let expression = op.expression(self.state.current.as_str());
                let operand = Operand::from_value(result);
                self.ledger = self.ledger.record(expression, operand.clone());
                self.state.current = operand;
                self.state.previous = None;
                self.state.pending_op = None;
                self.state.overwrite_next = true;
            }
            Err(_) => self.enter_error_state(),
        }
    }

    /// Evaluate the pending binary operation.
    ///
    /// No-op unless a pending operation, its left-hand operand, and a
    /// parseable current operand are all present. On success the full
    /// expression is recorded to history and the pending context is
    /// cleared; division by zero leaves the `"Error"` sentinel instead.
    pub fn evaluate_equals(&mut self) {
        let (Some(previous), Some(pending)) = (&self.state.previous, self.state.pending_op) else {
            return;
        };
        let (Some(lhs), Some(rhs)) = (previous.value(), self.state.current.value()) else {
            return;
        };

        match pending.apply(lhs, rhs) {
            Ok(result) => {
                let expression = format!(
                    "{} {} {}",
                    previous.as_str(),
                    pending.symbol(),
                    self.state.current.as_str()
                );
                let operand = Operand::from_value(result);
                self.ledger = self.ledger.record(expression, operand.clone());
                self.state.current = operand;
                self.state.previous = None;
                self.state.pending_op = None;
                self.state.overwrite_next = true;
            }
            Err(_) => self.enter_error_state(),
        }
    }

    /// Reset to the session-start state.
    ///
    /// Memory, history, and the angle unit are not affected.
    pub fn clear_all(&mut self) {
        self.state = EngineState {
            angle_unit: self.state.angle_unit,
            memory: self.state.memory,
            ..EngineState::new()
        };
    }

    /// Delete the last character of the current operand.
    ///
    /// In overwrite mode or on the `"Error"` sentinel this acts like a
    /// fresh start and resets `current` to `"0"`. Otherwise the last
    /// character is dropped, falling back to `"0"` when only one remains.
    pub fn delete_last_char(&mut self) {
        if self.state.overwrite_next || self.state.current.is_error() {
            self.state.current = Operand::zero();
            self.state.overwrite_next = false;
            return;
        }
        self.state.current.pop_char();
    }

    /// Divide the current operand by 100.
    ///
    /// Records a `"<x>%"` history entry. Pending binary context is left
    /// untouched. No-op on the `"Error"` sentinel.
    pub fn percent(&mut self) {
        let Some(x) = self.state.current.value() else {
            return;
        };

        let expression = format!("{}%", self.state.current.as_str());
        let operand = Operand::from_value(x / 100.0);
        self.ledger = self.ledger.record(expression, operand.clone());
        self.state.current = operand;
        self.state.overwrite_next = true;
    }

    /// Replace the current operand with a constant (π or e).
    ///
    /// Leaves overwrite mode off so an operator can chain on the
    /// constant immediately.
    pub fn insert_constant(&mut self, constant: Constant) {
        self.state.current = Operand::from_value(constant.value());
        self.state.overwrite_next = false;
    }

    /// Flip between degrees and radians. No other state changes.
    pub fn toggle_angle_unit(&mut self) {
        self.state.angle_unit = self.state.angle_unit.toggled();
    }

    // ------------------------------------------------------------------
    // Memory operations
    // ------------------------------------------------------------------

    /// Unset the memory accumulator.
    pub fn memory_clear(&mut self) {
        self.state.memory = None;
    }

    /// Copy memory into the current operand. No-op when memory is unset.
    pub fn memory_recall(&mut self) {
        if let Some(value) = self.state.memory {
            self.state.current = Operand::from_value(value);
            self.state.overwrite_next = true;
        }
    }

    /// Add the current operand into memory (unset memory counts as 0).
    ///
    /// No-op when the current operand does not parse as a number.
    pub fn memory_add(&mut self) {
        self.memory_accumulate(1.0);
    }

    /// Subtract the current operand from memory (unset memory counts as 0).
    pub fn memory_subtract(&mut self) {
        self.memory_accumulate(-1.0);
    }

    fn memory_accumulate(&mut self, sign: f64) {
        let Some(x) = self.state.current.value() else {
            return;
        };
        self.state.memory = Some(self.state.memory.unwrap_or(0.0) + sign * x);
        self.state.overwrite_next = true;
    }

    // ------------------------------------------------------------------
    // History coupling
    // ------------------------------------------------------------------

    /// Load a history entry's result into the current operand.
    ///
    /// Clears any pending binary context; the next digit overwrites.
    /// This is the only path by which ledger selection feeds back into
    /// engine state.
    pub fn select_entry(&mut self, entry: &HistoryEntry) {
        self.state.current = entry.result.clone();
        self.state.previous = None;
        self.state.pending_op = None;
        self.state.overwrite_next = true;
    }

    /// Empty the history ledger.
    pub fn clear_history(&mut self) {
        self.ledger = self.ledger.clear();
    }

    // ------------------------------------------------------------------
    // Observable state
    // ------------------------------------------------------------------

    /// Display text of the operand being edited.
    pub fn current(&self) -> &str {
        self.state.current.as_str()
    }

    /// Display text of the pending left-hand operand, if any.
    pub fn previous(&self) -> Option<&str> {
        self.state.previous.as_ref().map(Operand::as_str)
    }

    /// Display symbol of the pending operation, if any.
    pub fn pending_symbol(&self) -> Option<&'static str> {
        self.state.pending_op.map(|op| op.symbol())
    }

    /// Current angle unit.
    pub fn angle_unit(&self) -> AngleUnit {
        self.state.angle_unit
    }

    /// Whether the memory accumulator is set.
    pub fn memory_indicator(&self) -> bool {
        self.state.memory.is_some()
    }

    /// The full engine state, read-only.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The history ledger, newest first.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Capture a serializable snapshot of everything a renderer needs.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            version: SNAPSHOT_VERSION,
            taken_at: Utc::now(),
            current: self.state.current.as_str().to_string(),
            previous: self
                .state
                .previous
                .as_ref()
                .map(|operand| operand.as_str().to_string()),
            pending_symbol: self.pending_symbol().map(str::to_string),
            angle_unit: self.state.angle_unit,
            memory_indicator: self.memory_indicator(),
            history: self
                .ledger
                .entries()
                .iter()
                .map(|entry| LedgerEntryView {
                    id: entry.id,
                    expression: entry.expression.clone(),
                    result: entry.result.as_str().to_string(),
                })
                .collect(),
        }
    }

    /// Collapse to the `"Error"` sentinel, aborting any pending chain.
    fn enter_error_state(&mut self) {
        self.state.current = Operand::error();
        self.state.previous = None;
        self.state.pending_op = None;
        self.state.overwrite_next = true;
    }
}
