//! # Values in memory
//!
//! This module provides the data structures that operations consume and produce. Reading them from
//! text and writing them in encoded form happens in `io`.

pub mod number_types;
