//! Stack evaluation of postfix sequences

use crate::*;

impl Postfix {
    /// Evaluate the sequence for the given values of the variables.
    ///
    /// ```
    /// use proptable::{Assignment, Postfix, Variable};
    /// # use proptable::TableError;
    /// # fn main() -> Result<(), TableError> {
    ///
    /// let postfix: Postfix = "a => b".parse()?;
    /// let assignment: Assignment = [(Variable::try_from('a')?, true), (Variable::try_from('b')?, false)]
    ///     .into_iter()
    ///     .collect();
    /// assert!(!postfix.eval(&assignment)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, TableError> {
        evaluate(self, assignment)
    }
}

/// Evaluate a postfix sequence with a value stack.
///
/// # Errors
///
/// Returns an error if:
/// - a variable has no value in the assignment
/// - an operator lacks operands
/// - the evaluation does not end with exactly one value
pub fn evaluate(postfix: &Postfix, assignment: &Assignment) -> Result<bool, TableError> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for token in postfix.tokens() {
        match *token {
            Token::Variable(var) => {
                let value = assignment
                    .get(var)
                    .ok_or(TableError::UnboundVariable(var))?;
                stack.push(value);
            }
            Token::Operator(op) => {
                let value = match op.arity() {
                    1 => !pop_operand(&mut stack, op)?,
                    _ => {
                        let b = pop_operand(&mut stack, op)?;
                        let a = pop_operand(&mut stack, op)?;
                        op.eval(a, b)
                    }
                };
                stack.push(value);
            }
            // Parentheses never survive the conversion
            Token::LeftParen | Token::RightParen => {
                return Err(TableError::UnmatchedParenthesis)
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(TableError::MalformedExpression(stack.len())),
    }
}

fn pop_operand(stack: &mut Vec<bool>, op: Operator) -> Result<bool, TableError> {
    stack.pop().ok_or(TableError::StackUnderflow(op))
}

/// Convert and evaluate a formula in a single step
pub fn evaluate_formula(formula: &str, assignment: &Assignment) -> Result<bool, TableError> {
    to_postfix(formula)?.eval(assignment)
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::sync::Arc;

    fn assign(values: &[(char, bool)]) -> Assignment {
        values.iter().map(|(c, b)| (Variable(*c), *b)).collect()
    }

    #[test]
    fn operators() -> Result<(), TableError> {
        for a in [false, true] {
            for b in [false, true] {
                let values = assign(&[('a', a), ('b', b)]);
                assert_eq!(evaluate_formula("~a", &values)?, !a);
                assert_eq!(evaluate_formula("a & b", &values)?, a && b);
                assert_eq!(evaluate_formula("a | b", &values)?, a || b);
                assert_eq!(evaluate_formula("a => b", &values)?, !a || b);
                assert_eq!(evaluate_formula("a <=> b", &values)?, a == b);
            }
        }
        Ok(())
    }

    #[test]
    fn grouping() -> Result<(), TableError> {
        let vars = Arc::new(VarList::from_formula("abc"));
        let pairs = [
            ("a & b | c", "(a & b) | c"),
            ("~a & b", "(~a) & b"),
            ("a => b => c", "a => (b => c)"),
            ("a <=> b <=> c", "(a <=> b) <=> c"),
            ("a | b & c", "a | (b & c)"),
        ];
        for (implicit, explicit) in pairs {
            let p1 = to_postfix(implicit)?;
            let p2 = to_postfix(explicit)?;
            for row in 0..8 {
                let values = Assignment::from_row(&vars, row);
                assert_eq!(
                    p1.eval(&values)?,
                    p2.eval(&values)?,
                    "'{}' vs '{}' in {}",
                    implicit,
                    explicit,
                    values
                );
            }
        }

        // (a => b) => c differs from a => (b => c) when all are false
        let values = Assignment::from_row(&vars, 0);
        assert!(evaluate_formula("a => b => c", &values)?);
        assert!(!evaluate_formula("(a => b) => c", &values)?);
        Ok(())
    }

    #[test]
    fn unbound_variable() {
        let values = assign(&[('a', true)]);
        assert_eq!(
            evaluate_formula("a & b", &values),
            Err(TableError::UnboundVariable(Variable('b')))
        );
    }

    #[test]
    fn malformed() {
        let values = assign(&[('a', true), ('b', false)]);
        assert_eq!(
            evaluate_formula("a &", &values),
            Err(TableError::StackUnderflow(Operator::And))
        );
        assert_eq!(
            evaluate_formula("~", &values),
            Err(TableError::StackUnderflow(Operator::Not))
        );
        assert_eq!(
            evaluate_formula("ab", &values),
            Err(TableError::MalformedExpression(2))
        );
        assert_eq!(
            evaluate_formula("()", &values),
            Err(TableError::MalformedExpression(0))
        );
    }

    #[test]
    fn deterministic() -> Result<(), TableError> {
        let postfix = to_postfix("(a | b) & ~c")?;
        let values = assign(&[('a', true), ('b', false), ('c', false)]);
        assert!(postfix.eval(&values)?);
        assert!(postfix.eval(&values)?);
        Ok(())
    }
}
