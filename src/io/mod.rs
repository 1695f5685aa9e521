//! # Reading operands and writing results
//!
//! Operands arrive as decimal text and results leave as two hexadecimal 256-bit words. Everything
//! in between happens on the types in `data`.

pub mod abi;
pub mod error;
pub mod parse;
