use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolicError {
    /// Full evaluation reached a variable with no binding.
    UnboundVariable(String),
}

impl fmt::Display for SymbolicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolicError::UnboundVariable(name) => write!(f, "no value for variable {}", name),
        }
    }
}

impl Error for SymbolicError {}
