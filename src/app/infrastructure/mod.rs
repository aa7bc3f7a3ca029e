//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Disk-backed file store

pub mod error;
pub mod file_store;
