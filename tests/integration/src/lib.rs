//! Integration test utilities for the PodWave backend
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API over a throwaway SQLite file.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
