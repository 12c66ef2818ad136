//! Provides input/output functionality for assembly design files.
//!
//! This module contains the trait-based interface for design file I/O and the
//! scadnano-style JSON format used to persist finished designs. The engine
//! never touches the filesystem; serialization happens strictly after a
//! construction run has produced its in-memory [`Design`](crate::core::models::design::Design).

pub mod scadnano;
pub mod traits;
