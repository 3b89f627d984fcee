//! Split formulae into lexical tokens

use crate::*;
use once_cell::sync::Lazy;
use regex::{Matches, Regex};

// Multi-character operators come before their prefixes
static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]|<=>|=>|~|&|\||\(|\)").unwrap());

/// Lazy sequence of tokens in a formula.
///
/// Whitespace and unrecognized characters are skipped. Each letter is a separate variable:
/// ```ab``` yields two adjacent variables, which will later be rejected by the evaluator.
///
/// ```
/// use proptable::{tokenize, Operator, Token};
///
/// let tokens: Vec<Token> = tokenize("~(a <=> b)").collect();
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0], Token::Operator(Operator::Not));
/// assert_eq!(tokens[3], Token::Operator(Operator::Iff));
/// ```
pub struct Tokens<'a> {
    matches: Matches<'static, 'a>,
}

/// Tokenize a formula
pub fn tokenize(formula: &str) -> Tokens<'_> {
    Tokens {
        matches: RE_TOKEN.find_iter(formula),
    }
}

fn read_token(s: &str) -> Option<Token> {
    match s {
        "(" => Some(Token::LeftParen),
        ")" => Some(Token::RightParen),
        _ => {
            if let Some(op) = Operator::from_symbol(s) {
                return Some(Token::Operator(op));
            }
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Variable::try_from(c).ok().map(Token::Variable),
                _ => None,
            }
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        // Every match of the token pattern is a valid token
        self.matches.by_ref().find_map(|m| read_token(m.as_str()))
    }
}
