//! Lexical tokens of propositional formulae and their operators

use crate::Variable;
use std::fmt;

/// A lexical token of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single-letter variable
    Variable(Variable),
    /// A unary or binary operator
    Operator(Operator),
    /// Opening parenthesis
    LeftParen,
    /// Closing parenthesis
    RightParen,
}

/// Grouping direction of consecutive operators with the same precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Logical operators, from the tightest to the loosest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Negation: ~A
    Not,
    /// Conjunction: A & B
    And,
    /// Disjunction: A | B
    Or,
    /// Material implication: A => B
    Implies,
    /// Equivalence: A <=> B
    Iff,
}

impl Operator {
    /// Source symbol of this operator
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "~",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Implies => "=>",
            Operator::Iff => "<=>",
        }
    }

    /// Find the operator matching a source symbol
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "~" => Some(Operator::Not),
            "&" => Some(Operator::And),
            "|" => Some(Operator::Or),
            "=>" => Some(Operator::Implies),
            "<=>" => Some(Operator::Iff),
            _ => None,
        }
    }

    /// Binding strength: higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Not => 4,
            Operator::And => 3,
            Operator::Or => 2,
            Operator::Implies => 1,
            Operator::Iff => 0,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Not | Operator::Implies => Associativity::Right,
            Operator::And | Operator::Or | Operator::Iff => Associativity::Left,
        }
    }

    /// Number of operands
    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            _ => 2,
        }
    }

    /// Test if this operator must be applied before pushing `incoming` on the operator stack.
    ///
    /// Left-associative operators yield to anything binding at least as tight,
    /// right-associative ones only to operators binding strictly tighter.
    pub fn yields_to(self, incoming: Operator) -> bool {
        match incoming.associativity() {
            Associativity::Left => incoming.precedence() <= self.precedence(),
            Associativity::Right => incoming.precedence() < self.precedence(),
        }
    }

    /// Apply the truth function of a binary operator.
    ///
    /// `a` is the left operand. The negation ignores `b`.
    #[inline]
    pub fn eval(self, a: bool, b: bool) -> bool {
        match self {
            Operator::Not => !a,
            Operator::And => a && b,
            Operator::Or => a || b,
            Operator::Implies => !a || b,
            Operator::Iff => a == b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(v) => write!(f, "{}", v),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

impl From<Variable> for Token {
    fn from(var: Variable) -> Self {
        Token::Variable(var)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}
