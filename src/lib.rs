//! modsync - go.mod version mismatch checker and updater library
//!
//! This library provides the core functionality for keeping dependency
//! versions aligned across Go projects:
//! - Parsing the require block of a go.mod
//! - Pairwise comparison of dependency versions between manifests
//! - In-place rewriting of one dependency's version

pub mod cli;
pub mod compare;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
