//! Summary data types.
//!
//! All records are immutable snapshots produced by a single fetch. They are
//! created per request and discarded after rendering; nothing is cached or
//! reused across calls. Field names follow the backend's camelCase wire
//! format.

use pano_shared::EntityRef;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which summary an operation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryKind {
    /// The financial summary.
    Financial,
    /// The operational summary.
    Operational,
}

impl std::fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Financial => write!(f, "financial"),
            Self::Operational => write!(f, "operational"),
        }
    }
}

/// Financial summary snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Current cash balance.
    pub cash_balance: Decimal,
    /// Most recent transactions in the order the backend reports them.
    /// Absent when the backend has none to report.
    pub last_transactions: Option<Vec<TransactionEntry>>,
}

impl FinancialSummary {
    /// Returns the recent transactions, empty when the backend omitted them.
    #[must_use]
    pub fn transactions(&self) -> &[TransactionEntry] {
        self.last_transactions.as_deref().unwrap_or_default()
    }
}

/// A single transaction line in the financial summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEntry {
    /// Transaction identifier.
    pub id: EntityRef,
    /// Human-readable description.
    pub description: String,
    /// Transaction amount.
    pub amount: Decimal,
}

/// Operational summary snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalSummary {
    /// Number of production jobs currently in progress.
    pub in_progress_jobs: i32,
    /// Reference to the most recently completed order.
    pub last_completed_order: EntityRef,
}

/// Both dashboard summaries, paired positionally from a combined fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Financial section.
    pub financial: FinancialSummary,
    /// Operational section.
    pub operational: OperationalSummary,
}
