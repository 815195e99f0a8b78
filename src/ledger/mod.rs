//! Bounded history of completed calculations.
//!
//! The ledger keeps the most recent evaluations newest-first, up to a
//! fixed capacity. Entries are immutable once recorded; `record`
//! follows functional principles and returns a new ledger rather than
//! mutating the receiver.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::Operand;

/// Immutable record of one completed evaluation.
///
/// Entries are owned solely by the [`Ledger`] and never change after
/// creation. The `id` gives presentation layers a stable list key.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for list-key stability.
    pub id: Uuid,
    /// Human-readable rendering of what was computed, e.g. `"6 ÷ 3"`.
    pub expression: String,
    /// The formatted result.
    pub result: Operand,
    /// When the evaluation completed.
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(expression: String, result: Operand) -> Self {
        Self {
            id: Uuid::new_v4(),
            expression,
            result,
            recorded_at: Utc::now(),
        }
    }
}

/// Capacity-bounded, newest-first sequence of completed calculations.
///
/// # Example
///
/// ```rust
/// use reckon::{Ledger, Operand};
///
/// let ledger = Ledger::new();
/// let ledger = ledger.record("6 ÷ 3", Operand::from_value(2.0));
/// let ledger = ledger.record("2 + 2", Operand::from_value(4.0));
///
/// let entries = ledger.entries();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].expression, "2 + 2"); // newest first
/// assert_eq!(entries[1].expression, "6 ÷ 3");
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<HistoryEntry>,
}

impl Ledger {
    /// Maximum number of entries retained.
    pub const CAPACITY: usize = 20;

    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a completed evaluation, returning a new ledger.
    ///
    /// The entry is prepended; when the ledger is already at capacity
    /// the oldest (tail) entry is evicted. The receiver is unchanged.
    pub fn record(&self, expression: impl Into<String>, result: Operand) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(0, HistoryEntry::new(expression.into(), result));
        entries.truncate(Self::CAPACITY);
        Self { entries }
    }

    /// Drop every entry, returning an empty ledger.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recently recorded entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Look an entry up by id.
    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
