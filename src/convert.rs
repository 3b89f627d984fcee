//! Conversion of infix token streams into postfix sequences

use crate::*;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// A formula in postfix (operator-last) order.
///
/// The sequence only contains variables and operators: parentheses are resolved during the conversion.
/// It does not depend on the values of the variables and can be evaluated on any number of assignments.
///
/// ```
/// use proptable::Postfix;
/// # use proptable::TableError;
/// # fn main() -> Result<(), TableError> {
///
/// let postfix: Postfix = "a & b | ~c".parse()?;
/// assert_eq!(format!("{}", postfix), "a b & c ~ |");
///
/// let postfix: Postfix = "a => b => c".parse()?;
/// assert_eq!(format!("{}", postfix), "a b c => =>");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Postfix {
    pub(crate) tokens: Vec<Token>,
}

impl Postfix {
    /// Convert a stream of infix tokens with the shunting-yard algorithm.
    ///
    /// Fails if the stream is empty or if the parentheses are not balanced.
    pub fn from_tokens<I: IntoIterator<Item = Token>>(tokens: I) -> Result<Self, TableError> {
        let mut output = Vec::new();
        let mut stack: Vec<Token> = Vec::new();
        let mut empty = true;

        for token in tokens {
            empty = false;
            match token {
                Token::Variable(_) => output.push(token),
                Token::LeftParen => stack.push(token),
                Token::RightParen => loop {
                    match stack.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => output.push(top),
                        None => return Err(TableError::UnmatchedParenthesis),
                    }
                },
                Token::Operator(op) => {
                    while let Some(&Token::Operator(top)) = stack.last() {
                        if !top.yields_to(op) {
                            break;
                        }
                        output.push(Token::Operator(top));
                        stack.pop();
                    }
                    stack.push(token);
                }
            }
        }

        if empty {
            return Err(TableError::EmptyFormula);
        }

        while let Some(top) = stack.pop() {
            match top {
                Token::LeftParen => return Err(TableError::UnmatchedParenthesis),
                _ => output.push(top),
            }
        }

        log::trace!("postfix sequence: {}", output.iter().join(" "));
        Ok(Self { tokens: output })
    }

    /// The tokens in evaluation order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Collect the variables used in this sequence
    pub fn variables(&self) -> VarList {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                Token::Variable(v) => Some(*v),
                _ => None,
            })
            .collect()
    }
}

/// Convert a formula into its postfix sequence
pub fn to_postfix(formula: &str) -> Result<Postfix, TableError> {
    log::debug!("converting formula '{}'", formula);
    Postfix::from_tokens(tokenize(formula))
}

impl FromStr for Postfix {
    type Err = TableError;

    fn from_str(formula: &str) -> Result<Self, Self::Err> {
        to_postfix(formula)
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}
