//! # Exact rational arithmetic with ABI encoded results
//!
//! Two rationals are given as arbitrary precision numerator and denominator pairs. They are
//! reduced to lowest terms, combined with one of four arithmetic operations or compared with one of
//! six comparisons, and the result is written as two 256-bit big-endian words: the layout of an
//! `(int256, uint256)` value at a smart contract call boundary.
//!
//! ```
//! use fraction_abi::operation::{run, OperationSet};
//!
//! let encoded = run(OperationSet::Full, "add", ["1", "2", "1", "3"]).unwrap();
//! assert_eq!(&encoded[..64], format!("{:0>64}", "5"));
//! assert_eq!(&encoded[64..], format!("{:0>64}", "6"));
//! ```
#![warn(missing_docs)]

pub mod data;
pub mod io;
pub mod operation;

pub use data::number_types::binary::Binary;
pub use data::number_types::rational::Rational;
pub use io::error::{Error, Result};
pub use operation::{Operation, OperationSet, Outcome, Request, dispatch, run};
