use crate::{Operator, Variable};
use thiserror::Error;

/// Failure to evaluate a formula or to build its truth table.
///
/// All variants derive from the input text alone: retrying the same formula always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The name is not a single letter
    #[error("The name '{0}' is not a valid variable")]
    InvalidName(String),

    /// The formula does not contain any token
    #[error("The formula is empty")]
    EmptyFormula,

    /// A closing parenthesis without opening one, or an opening one never closed
    #[error("Unmatched parenthesis in formula")]
    UnmatchedParenthesis,

    /// The assignment has no value for this variable
    #[error("There is no value for variable '{0}'")]
    UnboundVariable(Variable),

    /// An operator was applied without enough operands
    #[error("Missing operand for operator '{0}'")]
    StackUnderflow(Operator),

    /// The evaluation did not end with a single value
    #[error("Not a valid expression ({0} values left after evaluation)")]
    MalformedExpression(usize),

    /// The formula uses more variables than allowed for a table
    #[error("Too many variables: found {found}, the limit is {max}")]
    TooManyVariables { found: usize, max: usize },
}
