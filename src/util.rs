//! Defines the `Error` type for the thomas library

use std::error::Error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, ThomasError>;

#[derive(Clone, Debug)]
pub enum ThomasError {

    /// Represents an incomplete observation where a complete observation was required.
    IncompleteAssignment,

    /// Represents a supplied vector of values whose length does not match what the receiver
    /// expects - a node's parent count, or the network's node count
    DimensionMismatch,

    /// Exactly what it sounds like
    DivideByZero,

    /// Represents an error where there was a parent variable expected, but not found
    MissingParent,

    /// Represents a variable that was present multiple times in a situation where it should only
    /// have been present once
    DuplicateVariable,

    /// A general error with the given description
    General(String),

    /// An unknown error condition
    Unknown

}

impl Error for ThomasError {

    fn description(&self) -> &str {
        match self {
            &ThomasError::IncompleteAssignment => "Missing observed values for required variables",
            &ThomasError::DimensionMismatch => "Supplied values do not match the expected length",
            &ThomasError::DivideByZero => "Encountered division by zero",
            &ThomasError::MissingParent => "Missing a parent from the network",
            &ThomasError::DuplicateVariable => "A variable was encountered twice",
            &ThomasError::General(ref err) => err.as_str(),
            &ThomasError::Unknown => "An unknown error occured"
        }
    }

    fn cause(&self) -> Option<&Error> {
        None
    }

}

impl fmt::Display for ThomasError {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }

}
