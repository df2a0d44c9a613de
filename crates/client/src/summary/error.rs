//! Fetch error type.

use thiserror::Error;

use super::types::SummaryKind;

/// Error returned when a summary fetch does not produce a snapshot.
///
/// A non-success HTTP status and a failed transport surface through the same
/// type; the only distinction is the optional source. Status codes are not
/// differentiated (a 404 and a 500 fail identically).
#[derive(Debug, Error)]
#[error("Failed to fetch {kind} summary")]
pub struct FetchFailure {
    /// Which summary was being fetched.
    pub kind: SummaryKind,
    /// Underlying transport or decode error, absent for a plain non-success
    /// status.
    #[source]
    pub source: Option<reqwest::Error>,
}

impl FetchFailure {
    /// Failure from a non-success HTTP status.
    #[must_use]
    pub const fn status(kind: SummaryKind) -> Self {
        Self { kind, source: None }
    }

    /// Failure from a transport or body-decoding error.
    #[must_use]
    pub const fn transport(kind: SummaryKind, source: reqwest::Error) -> Self {
        Self {
            kind,
            source: Some(source),
        }
    }
}
