//! Implementation for variables and their collection in formulae

use crate::*;

use delegate::delegate;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

static RE_VARIABLE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([a-zA-Z])\s*$").unwrap());

/// A single Boolean variable, named by one ASCII letter.
///
/// Variables are ordered by their letter (uppercase letters come before lowercase ones),
/// this order defines the columns of a truth table.
///
/// ```
/// use proptable::Variable;
///
/// let a: Variable = "a".parse().unwrap();
/// assert_eq!(a, Variable::try_from('a').unwrap());
/// assert!(Variable::try_from('1').is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Variable(pub(crate) char);

impl Variable {
    /// Return the letter naming this variable
    pub fn name(&self) -> char {
        self.0
    }

    /// Test if a character can name a variable
    pub fn is_valid_name(c: char) -> bool {
        c.is_ascii_alphabetic()
    }
}

impl TryFrom<char> for Variable {
    type Error = TableError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match Self::is_valid_name(c) {
            true => Ok(Self(c)),
            false => Err(TableError::InvalidName(c.to_string())),
        }
    }
}

impl FromStr for Variable {
    type Err = TableError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        RE_VARIABLE_NAME
            .captures(name)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().chars().next())
            .map(Variable)
            .ok_or_else(|| TableError::InvalidName(name.to_string()))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sorted list of distinct variables.
///
/// The position of a variable in the list is its column in a truth table and the
/// bit it takes in the row index (the first variable is the most significant bit).
///
/// ```
/// use proptable::VarList;
///
/// let vars = VarList::from_formula("(b | a) & ~b");
/// assert_eq!(vars.len(), 2);
/// assert_eq!(format!("{}", vars), "a b");
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct VarList {
    variables: Vec<Variable>,
}

impl VarList {
    /// Collect the variables of a formula.
    ///
    /// Every ASCII letter is a distinct variable, all other characters are ignored.
    pub fn from_formula(formula: &str) -> Self {
        formula
            .chars()
            .filter_map(|c| Variable::try_from(c).ok())
            .collect()
    }

    delegate! {
        to self.variables {
            /// Number of variables in the list
            pub fn len(&self) -> usize;

            /// Return whether the list is empty
            pub fn is_empty(&self) -> bool;

            /// Iterate over the variables in order
            pub fn iter(&self) -> std::slice::Iter<'_, Variable>;

            /// Get the variable at the given position
            pub fn get(&self, idx: usize) -> Option<&Variable>;
        }
    }

    /// Find the position of a variable in the list
    pub fn position(&self, var: Variable) -> Option<usize> {
        self.variables.binary_search(&var).ok()
    }

    /// Borrow the underlying slice
    pub fn as_slice(&self) -> &[Variable] {
        &self.variables
    }
}

impl FromIterator<Variable> for VarList {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self {
            variables: iter.into_iter().sorted().dedup().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a VarList {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}

impl fmt::Display for VarList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.variables.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn parse_variables() {
        assert_eq!("a".parse::<Variable>(), Ok(Variable('a')));
        assert_eq!(" Z ".parse::<Variable>(), Ok(Variable('Z')));
        assert_eq!(
            "ab".parse::<Variable>(),
            Err(TableError::InvalidName("ab".to_string()))
        );
        assert!("_1_".parse::<Variable>().is_err());
        assert!(Variable::try_from('é').is_err());
    }

    #[test]
    fn collect_sorted_distinct() {
        let vars = VarList::from_formula("c => (a & b) | ~a <=> C");
        let names: String = vars.iter().map(|v| v.name()).collect();
        assert_eq!(names, "Cabc");
        assert_eq!(vars.position(Variable('b')), Some(2));
        assert_eq!(vars.position(Variable('d')), None);
    }

    #[test]
    fn no_variables() {
        let vars = VarList::from_formula("~ & (|) => 123");
        assert!(vars.is_empty());
        assert_eq!(format!("{}", vars), "");
    }
}
