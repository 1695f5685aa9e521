//! # Number types
//!
//! The values the operations are defined over: exact fractions, and the zero-or-one outcome of a
//! comparison between two of them.
pub mod rational;
pub mod binary;
