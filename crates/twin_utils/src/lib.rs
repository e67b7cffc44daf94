//! Shared utilities for the twin crates.
//!
//! Currently this only provides deterministic hash containers, used as the
//! default unordered `set` and `map` shapes of the serializer.
#![no_std]

// -----------------------------------------------------------------------------
// Modules

pub mod hash;
