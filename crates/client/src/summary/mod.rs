//! Remote summary fetching.
//!
//! This module provides the summary client and its data types:
//! - Financial and operational summary snapshots
//! - The HTTP client issuing the summary requests
//! - The fetch error type

pub mod client;
pub mod error;
pub mod types;

pub use client::SummaryClient;
pub use error::FetchFailure;
pub use types::*;
