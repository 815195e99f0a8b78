//! Serializable render snapshots of the observable calculator state.
//!
//! A snapshot is a fully owned, versioned copy of everything a
//! presentation layer needs to draw the calculator: display operands,
//! the pending-operation symbol, mode indicators, and the history list.
//! It can be serialized across a process boundary (a UI thread, an IPC
//! channel) without holding any reference into the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::AngleUnit;

/// Version identifier for the snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One history entry, reduced to what a renderer shows.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LedgerEntryView {
    /// Stable list key.
    pub id: Uuid,
    /// Human-readable expression, e.g. `"6 ÷ 3"`.
    pub expression: String,
    /// Formatted result text.
    pub result: String,
}

/// Point-in-time copy of the observable engine state.
///
/// Produced by [`Calculator::snapshot`](crate::Calculator::snapshot).
///
/// # Example
///
/// ```rust
/// use reckon::{BinaryOp, Calculator};
///
/// let mut calculator = Calculator::new();
/// calculator.enter_digit('4');
/// calculator.enter_binary_op(BinaryOp::Add);
///
/// let snapshot = calculator.snapshot();
/// assert_eq!(snapshot.previous.as_deref(), Some("4"));
/// assert_eq!(snapshot.pending_symbol.as_deref(), Some("+"));
///
/// // fully serializable for the presentation layer
/// let json = serde_json::to_string(&snapshot).unwrap();
/// assert!(json.contains("\"current\""));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Snapshot format version.
    pub version: u32,
    /// When the snapshot was taken.
    pub taken_at: DateTime<Utc>,
    /// Display text of the operand being edited.
    pub current: String,
    /// Display text of the pending left-hand operand.
    pub previous: Option<String>,
    /// Display symbol of the pending binary operation.
    pub pending_symbol: Option<String>,
    /// Current angle unit.
    pub angle_unit: AngleUnit,
    /// Whether the memory accumulator is set.
    pub memory_indicator: bool,
    /// History entries, newest first.
    pub history: Vec<LedgerEntryView>,
}
