//! Typed summary fetching client for Pano.
//!
//! This crate translates named summary requests into HTTP calls against the
//! backend and returns immutable typed snapshots. It owns no state beyond a
//! base URL and a connection pool: every fetch is a single-shot,
//! stateless request/response.
//!
//! The presentation layer is a pure consumer of this crate's output.

pub mod summary;

pub use pano_shared::EntityRef;
pub use summary::client::SummaryClient;
pub use summary::error::FetchFailure;
pub use summary::types::{
    DashboardSummary, FinancialSummary, OperationalSummary, SummaryKind, TransactionEntry,
};
