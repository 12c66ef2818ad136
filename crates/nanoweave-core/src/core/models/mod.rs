//! # Core Models Module
//!
//! This module contains the data structures used to represent a nanostructure
//! assembly, providing the foundation for all construction operations.
//!
//! ## Overview
//!
//! The models describe a lattice of parallel linear helices populated by
//! strands. Each strand occupies one or more contiguous intervals (domains)
//! on the helices; nicks split strands into independently addressable pieces,
//! loopouts join helix positions with flexible single-stranded connectors,
//! and crossovers link two helices rigidly at a shared offset.
//!
//! ## Key Components
//!
//! - [`helix`] - Fixed-capacity linear tracks, allocated once per design
//! - [`domain`] - Half-open intervals `[start, end)` with an orientation flag
//! - [`strand`] - Ordered, non-empty sequences of domains
//! - [`connectors`] - Nick, loopout, and crossover records
//! - [`design`] - The central mutable container and its invariants
//! - [`error`] - Model-level error taxonomy
//! - [`ids`] - Unique identifier types for strands

pub mod connectors;
pub mod design;
pub mod domain;
pub mod error;
pub mod helix;
pub mod ids;
pub mod strand;
