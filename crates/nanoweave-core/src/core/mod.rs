//! # Core Module
//!
//! This module provides the fundamental building blocks for representing
//! DNA-origami-style lattice assemblies in NanoWeave.
//!
//! ## Overview
//!
//! The core module implements the data structures and serialization support
//! required to describe a nanostructure assembly: parallel linear helices,
//! strands made of contiguous domains, and the connectors that join them
//! (nicks, loopouts, crossovers, and sticky-end overhangs).
//!
//! ## Architecture
//!
//! - **Topological Representation** ([`models`]) - Helices, domains, strands,
//!   connector records, and the central `Design` container with its invariants
//! - **File I/O** ([`io`]) - Reading/writing the scadnano-style `.sc` format

pub mod io;
pub mod models;
