//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate complete
//! construction runs in NanoWeave.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of the library. They tie the
//! `engine` and `core` layers together: parameter validation, the fixed
//! five-phase construction pipeline, per-directive recovery, progress
//! reporting, and run-report collection.
//!
//! - **Build Workflow** ([`build`]) - Full assembly construction from a
//!   parameter set: helix allocation, base strands with mid-length nicks,
//!   loopouts, crossovers, and sticky-end overhangs.

pub mod build;
