//! # Engine Module
//!
//! This module implements the construction machinery for turning a validated
//! parameter set into a populated assembly design.
//!
//! ## Overview
//!
//! The engine owns everything between the raw parameter set and the finished
//! design: parameter validation, the error taxonomy, the ordered retry
//! ladders used for per-directive recovery, the unified overhang operation,
//! the per-directive run report, and the progress-reporting seam. The actual
//! five-phase pipeline lives in [`crate::workflows::build`], which composes
//! these pieces.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The parameter set contract and its validation
//! - **Error Handling** ([`error`]) - Engine-level error types; only missing core
//!   parameters are fatal to a run
//! - **Run Report** ([`report`]) - Per-directive outcome records for auditability
//! - **Recovery** ([`recovery`]) - Ordered candidate ladders, first success wins
//! - **Overhangs** ([`overhang`]) - The single parameterized overhang-pair operation
//! - **Progress Monitoring** ([`progress`]) - Phase and directive progress callbacks

pub mod config;
pub mod error;
pub(crate) mod overhang;
pub mod progress;
pub(crate) mod recovery;
pub mod report;
