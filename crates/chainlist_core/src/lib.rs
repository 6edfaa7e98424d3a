//! Core chain logic for chainlist.
//! This crate is the single source of truth for link invariants.

pub mod audit;
pub mod logging;
pub mod model;

pub use audit::{audit, AuditError, AuditResult, ChainAudit};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::chain::Chain;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
