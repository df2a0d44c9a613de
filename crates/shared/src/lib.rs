//! Shared types and configuration for Pano.
//!
//! This crate provides common types used across all other crates:
//! - Loosely-typed entity references for backend identifiers
//! - Configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, BackendConfig};
pub use types::EntityRef;
