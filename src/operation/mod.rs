//! # Operations
//!
//! A request names one of ten operations and supplies two rationals as unreduced numerator and
//! denominator pairs. Arithmetic operations produce a new rational, comparisons produce a binary
//! value; either is then written as two ABI words.
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use enum_map::{Enum, EnumMap, enum_map};
use num_bigint::BigInt;

use crate::data::number_types::binary::Binary;
use crate::data::number_types::rational::Rational;
use crate::io::abi::{Encode, Encoded};
use crate::io::error::{Error, Result};
use crate::io::parse::parse_integer;


/// The recognized operations, grouped by the kind of value they produce.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Operation {
    /// Produces a new rational.
    Arithmetic(Arithmetic),
    /// Produces a binary value.
    Comparison(Comparison),
}

/// Operations producing a rational.
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Arithmetic {
    Add,
    Sub,
    Mul,
    Div,
}

/// Operations producing a binary value.
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Comparison {
    Lt,
    Gt,
    Eq,
    Neq,
    Lte,
    Gte,
}

/// Outcome of comparing two rationals.
#[allow(missing_docs)]
#[derive(Enum, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Relation {
    Less,
    Equal,
    Greater,
}

impl From<Ordering> for Relation {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Relation::Less,
            Ordering::Equal => Relation::Equal,
            Ordering::Greater => Relation::Greater,
        }
    }
}

impl Arithmetic {
    /// All arithmetic operations.
    pub const ALL: [Arithmetic; 4] = [Arithmetic::Add, Arithmetic::Sub, Arithmetic::Mul, Arithmetic::Div];

    /// The name by which the operation is requested.
    pub fn name(self) -> &'static str {
        match self {
            Arithmetic::Add => "add",
            Arithmetic::Sub => "sub",
            Arithmetic::Mul => "mul",
            Arithmetic::Div => "div",
        }
    }

    /// Compute a new canonical rational, leaving the operands untouched.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when dividing by zero.
    pub fn apply(self, x: &Rational, y: &Rational) -> Result<Rational> {
        match self {
            Arithmetic::Add => Ok(x + y),
            Arithmetic::Sub => Ok(x - y),
            Arithmetic::Mul => Ok(x * y),
            Arithmetic::Div => x.checked_div(y),
        }
    }
}

impl Comparison {
    /// All comparisons.
    pub const ALL: [Comparison; 6] = [
        Comparison::Lt, Comparison::Gt, Comparison::Eq,
        Comparison::Neq, Comparison::Lte, Comparison::Gte,
    ];

    /// The name by which the comparison is requested.
    pub fn name(self) -> &'static str {
        match self {
            Comparison::Lt => "lt",
            Comparison::Gt => "gt",
            Comparison::Eq => "eq",
            Comparison::Neq => "neq",
            Comparison::Lte => "lte",
            Comparison::Gte => "gte",
        }
    }

    /// Which relations between the operands make this comparison hold.
    pub fn accepted_relations(self) -> EnumMap<Relation, bool> {
        let (less, equal, greater) = match self {
            Comparison::Lt => (true, false, false),
            Comparison::Gt => (false, false, true),
            Comparison::Eq => (false, true, false),
            Comparison::Neq => (true, false, true),
            Comparison::Lte => (true, true, false),
            Comparison::Gte => (false, true, true),
        };

        enum_map! {
            Relation::Less    => less,
            Relation::Equal   => equal,
            Relation::Greater => greater,
        }
    }

    /// Decide the comparison with a single exact cross multiplication.
    pub fn apply(self, x: &Rational, y: &Rational) -> Binary {
        let relation = Relation::from(x.compare(y));

        Binary::from(self.accepted_relations()[relation])
    }
}

impl Operation {
    /// All operations, arithmetic first.
    pub fn all() -> impl Iterator<Item=Operation> {
        Arithmetic::ALL.into_iter().map(Operation::Arithmetic)
            .chain(Comparison::ALL.into_iter().map(Operation::Comparison))
    }

    /// The name by which the operation is requested.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Arithmetic(operation) => operation.name(),
            Operation::Comparison(operation) => operation.name(),
        }
    }

    /// Apply this operation to two canonical rationals.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when dividing by zero.
    pub fn apply(self, x: &Rational, y: &Rational) -> Result<Outcome> {
        let outcome = match self {
            Operation::Arithmetic(operation) => Outcome::Rational(operation.apply(x, y)?),
            Operation::Comparison(operation) => Outcome::Binary(operation.apply(x, y)),
        };
        log::debug!("{} {} {} = {}", x, self, y, outcome);

        Ok(outcome)
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Operation::all()
            .find(|operation| operation.name() == name)
            .ok_or_else(|| Error::UnknownOperation(name.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which operations may be requested.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub enum OperationSet {
    /// All ten operations.
    #[default]
    Full,
    /// Only `add`, `sub`, `mul` and `div`.
    Arithmetic,
}

impl OperationSet {
    /// Whether the operation is enabled.
    pub fn contains(self, operation: Operation) -> bool {
        match self {
            OperationSet::Full => true,
            OperationSet::Arithmetic => matches!(operation, Operation::Arithmetic(_)),
        }
    }

    /// Look up an operation by name within this set.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` for a name that is not recognized at all, `UnsupportedOperation` for an
    /// operation outside of this set.
    pub fn resolve(self, name: &str) -> Result<Operation> {
        let operation = name.parse()?;
        if self.contains(operation) {
            Ok(operation)
        } else {
            Err(Error::UnsupportedOperation(name.to_string()))
        }
    }
}

/// The result of an operation, before encoding.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Outcome {
    /// Result of an arithmetic operation.
    Rational(Rational),
    /// Result of a comparison.
    Binary(Binary),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Rational(value) => write!(f, "{}", value),
            Outcome::Binary(value) => write!(f, "{}", value),
        }
    }
}

impl Encode for Outcome {
    fn encode(&self) -> Result<Encoded> {
        match self {
            Outcome::Rational(value) => value.encode(),
            Outcome::Binary(value) => value.encode(),
        }
    }
}

/// A single request: an operation and two operands as supplied, not yet reduced.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Request {
    operation: Operation,
    a: (BigInt, BigInt),
    b: (BigInt, BigInt),
}

impl Request {
    /// Create a new request from integers.
    ///
    /// # Arguments
    ///
    /// * `operation`: What to compute.
    /// * `a`: Numerator and denominator of the left operand.
    /// * `b`: Numerator and denominator of the right operand.
    pub fn new(operation: Operation, a: (BigInt, BigInt), b: (BigInt, BigInt)) -> Self {
        Self { operation, a, b }
    }

    /// Read a request from text.
    ///
    /// # Arguments
    ///
    /// * `operations`: The operations that may be requested.
    /// * `operation`: Name of the operation.
    /// * `operands`: Numerator and denominator of the left operand, then of the right operand, as
    /// base-10 integers.
    ///
    /// # Errors
    ///
    /// When the operation is unknown or not enabled, or an operand is not an integer.
    pub fn parse(operations: OperationSet, operation: &str, operands: [&str; 4]) -> Result<Self> {
        let operation = operations.resolve(operation)?;
        let [a_numer, a_denom, b_numer, b_denom] = operands;

        Ok(Self::new(
            operation,
            (parse_integer(a_numer)?, parse_integer(a_denom)?),
            (parse_integer(b_numer)?, parse_integer(b_denom)?),
        ))
    }

    /// The requested operation.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Reduce both operands and apply the operation.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when an operand has a zero denominator, or when dividing by zero.
    pub fn evaluate(self) -> Result<Outcome> {
        let Self { operation, a: (a_numer, a_denom), b: (b_numer, b_denom) } = self;
        let x = Rational::new(a_numer, a_denom)?;
        let y = Rational::new(b_numer, b_denom)?;

        operation.apply(&x, &y)
    }
}

/// Compute an operation and encode the result.
///
/// # Arguments
///
/// * `operation`: Name of one of the ten operations.
/// * `a_numer`, `a_denom`: The left operand, any nonzero denominator.
/// * `b_numer`, `b_denom`: The right operand, any nonzero denominator.
///
/// # Return value
///
/// 128 lowercase hexadecimal characters: the numerator (or comparison outcome) word followed by
/// the denominator word.
///
/// # Errors
///
/// `UnknownOperation`, `DivisionByZero` or `EncodingOverflow`.
pub fn dispatch(
    operation: &str,
    a_numer: BigInt,
    a_denom: BigInt,
    b_numer: BigInt,
    b_denom: BigInt,
) -> Result<String> {
    let operation = OperationSet::Full.resolve(operation)?;
    let request = Request::new(operation, (a_numer, a_denom), (b_numer, b_denom));

    encode_outcome(request)
}

/// Read a request from text, compute it and encode the result.
///
/// # Errors
///
/// Any error of parsing, computing or encoding.
pub fn run(operations: OperationSet, operation: &str, operands: [&str; 4]) -> Result<String> {
    let request = Request::parse(operations, operation, operands)?;

    encode_outcome(request)
}

fn encode_outcome(request: Request) -> Result<String> {
    log::debug!("evaluating {:?}", request);
    let outcome = request.evaluate()?;

    Ok(outcome.encode()?.to_string())
}
