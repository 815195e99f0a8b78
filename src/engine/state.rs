//! Engine state types: the operand display string, angle unit, and the
//! mutable state record the calculator holds between inputs.
//!
//! All types here are plain serializable values with no side effects;
//! every state change goes through the `Calculator` operation set.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::operation::BinaryOp;

/// Sentinel display text for a failed computation.
pub const ERROR_SENTINEL: &str = "Error";

/// A numeric value represented as its canonical display string.
///
/// An operand is either a literal being typed (`"12.5"`), a formatted
/// result (`"20"`), or the `"Error"` sentinel left behind by a failed
/// computation. Invariants: at most one decimal point; no redundant
/// leading zeros beyond a single `"0"`.
///
/// Formatting of computed results uses `f64`'s `Display`, which yields
/// the shortest string that round-trips to the same value. Infinity is
/// a permitted operand and renders as `inf`.
///
/// # Example
///
/// ```rust
/// use reckon::Operand;
///
/// let operand = Operand::from_value(2.0);
/// assert_eq!(operand.as_str(), "2");
/// assert_eq!(operand.value(), Some(2.0));
///
/// assert!(Operand::error().is_error());
/// assert_eq!(Operand::error().value(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Operand(String);

impl Operand {
    /// The initial operand, `"0"`.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// The `"Error"` sentinel operand.
    pub fn error() -> Self {
        Self(ERROR_SENTINEL.to_string())
    }

    /// Format a computed value as an operand.
    pub fn from_value(value: f64) -> Self {
        Self(value.to_string())
    }

    pub(crate) fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The display text of this operand.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this operand is the `"Error"` sentinel.
    pub fn is_error(&self) -> bool {
        self.0 == ERROR_SENTINEL
    }

    /// Whether the display text is exactly `"0"`.
    pub fn is_zero_text(&self) -> bool {
        self.0 == "0"
    }

    /// Whether a decimal point has already been entered.
    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Parse the operand as a number.
    ///
    /// Returns `None` for the `"Error"` sentinel or unparseable text.
    /// Trailing-dot literals such as `"0."` are mid-entry states that a
    /// caller may still evaluate, and `str::parse::<f64>` accepts them.
    ///
    /// ```rust
    /// use reckon::Operand;
    ///
    /// assert_eq!(Operand::from_value(2.5).value(), Some(2.5));
    /// assert_eq!(Operand::error().value(), None);
    /// ```
    pub fn value(&self) -> Option<f64> {
        if self.is_error() {
            return None;
        }
        self.0.parse().ok()
    }

    pub(crate) fn push(&mut self, ch: char) {
        self.0.push(ch);
    }

    /// Drop the last character, resetting to `"0"` when nothing usable
    /// would remain.
    pub(crate) fn pop_char(&mut self) {
        self.0.pop();
        if self.0.is_empty() {
            self.0 = "0".to_string();
        }
    }
}

impl Default for Operand {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Angle unit for the trigonometric operations.
///
/// Affects only the trig family: inputs to `sin`/`cos`/`tan` and
/// outputs of `asin`/`acos`/`atan` are converted; everything else
/// passes through untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    /// The other unit.
    pub fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    /// Convert a user-facing angle into radians for computation.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }

    /// Convert a computed angle in radians back into this unit.
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_degrees(),
            Self::Radians => angle,
        }
    }
}

/// The mutable data the calculator holds between inputs.
///
/// Invariant: `pending_op` is set if and only if `previous` is set.
/// The operation set always assigns and clears the pair together.
///
/// `overwrite_next` is a mode flag of the state machine: when true the
/// next digit input replaces `current` instead of appending to it. It
/// is raised by every completed operation and lowered by digit entry.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EngineState {
    /// The operand currently visible and being edited.
    pub current: Operand,
    /// Left-hand operand of a pending binary operation.
    pub previous: Option<Operand>,
    /// The selected binary operator awaiting its right-hand operand.
    pub pending_op: Option<BinaryOp>,
    /// Whether the next digit replaces `current` rather than appending.
    pub overwrite_next: bool,
    /// Unit used by the trigonometric operations.
    pub angle_unit: AngleUnit,
    /// Memory accumulator for the M+/M-/MR/MC family.
    pub memory: Option<f64>,
}

impl EngineState {
    /// The session-start state: `current = "0"`, everything else off.
    pub fn new() -> Self {
        Self {
            current: Operand::zero(),
            previous: None,
            pending_op: None,
            overwrite_next: true,
            angle_unit: AngleUnit::Degrees,
            memory: None,
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}
