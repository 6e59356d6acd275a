//! Core domain models for modsync
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency tables parsed from a single go.mod
//! - Version mismatch records and their grouping by dependency
//! - Update records describing rewritten manifest lines

mod mismatch;
mod table;
mod update_record;

pub use mismatch::{MismatchGroup, MismatchRecord, MismatchReport};
pub use table::DependencyTable;
pub use update_record::{UpdateRecord, UpdateReport};
