//! # NanoWeave Core Library
//!
//! A library for deterministically constructing DNA-origami-style lattice designs
//! from structured, numeric parameter sets.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the topological data model (`Design`,
//!   helices, strands, domains, nicks, loopouts, crossovers) with its invariants,
//!   and I/O utilities for the scadnano-style on-disk format.
//!
//! - **[`engine`]: The Logic Core.** This layer holds the construction machinery:
//!   parameter validation, the error taxonomy, ordered retry ladders for directive
//!   recovery, the unified overhang operation, the per-directive run report, and
//!   the progress-reporting seam.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties `engine` and `core` together to execute a complete construction run:
//!   helix allocation, base strands, loops, crossovers, and sticky ends, in that
//!   fixed order, with bounded per-directive recovery.

pub mod core;
pub mod engine;
pub mod workflows;
