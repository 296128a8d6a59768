// src/output/mod.rs
// =============================================================================
// This module writes results to disk.
//
// Submodules:
// - writer: pretty JSON result files and failure logs
// =============================================================================

mod writer;

pub use writer::{write_json, write_log};
