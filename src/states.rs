use crate::*;
use bit_set::BitSet;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

/// Truth values for a list of variables.
///
/// The assignment associates a value to each variable of a [VarList], shared between all
/// the assignments of a truth table. Internally, the positions of the true variables are stored
/// in a bit-set.
///
/// ```
/// use proptable::{Assignment, Variable, VarList};
/// use std::sync::Arc;
///
/// let vars = Arc::new(VarList::from_formula("a & b & c"));
///
/// // Row 5 = 0b101: the first variable is the most significant bit
/// let assignment = Assignment::from_row(&vars, 5);
/// assert_eq!(assignment.get(Variable::try_from('a').unwrap()), Some(true));
/// assert_eq!(assignment.get(Variable::try_from('b').unwrap()), Some(false));
/// assert_eq!(assignment.get(Variable::try_from('c').unwrap()), Some(true));
/// assert_eq!(assignment.get(Variable::try_from('d').unwrap()), None);
///
/// // Build an assignment from explicit values
/// let assignment: Assignment = [('x', true), ('y', false)]
///     .into_iter()
///     .map(|(c, b)| (Variable::try_from(c).unwrap(), b))
///     .collect();
/// assert_eq!(format!("{}", assignment), "x=V y=F");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    variables: Arc<VarList>,
    active: BitSet,
}

impl Assignment {
    /// Create an assignment where all variables are false
    pub fn new(variables: Arc<VarList>) -> Self {
        Self {
            variables,
            active: BitSet::default(),
        }
    }

    /// Create the assignment corresponding to a row index.
    ///
    /// The variable at position `k` is true iff bit `n - k - 1` of the index is set.
    pub fn from_row(variables: &Arc<VarList>, row: u64) -> Self {
        let n = variables.len();
        let mut assignment = Self::new(Arc::clone(variables));
        for k in 0..n {
            if (row >> (n - k - 1)) & 1 == 1 {
                assignment.active.insert(k);
            }
        }
        assignment
    }

    /// The value of a variable, if it is part of this assignment
    pub fn get(&self, var: Variable) -> Option<bool> {
        self.variables
            .position(var)
            .map(|idx| self.active.contains(idx))
    }

    /// Change the value of a variable, return false if it is not part of this assignment
    pub fn set(&mut self, var: Variable, value: bool) -> bool {
        match self.variables.position(var) {
            None => false,
            Some(idx) => {
                match value {
                    true => self.active.insert(idx),
                    false => self.active.remove(idx),
                };
                true
            }
        }
    }

    /// The list of assigned variables
    pub fn variables(&self) -> &VarList {
        &self.variables
    }

    /// The value of each variable, in the order of the variable list
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.variables.len()).map(|idx| self.active.contains(idx))
    }

    /// Iterate over variables and their values
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.variables.iter().copied().zip(self.values())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, bool)>>(iter: I) -> Self {
        // The last value given for a variable wins
        let values: BTreeMap<Variable, bool> = iter.into_iter().collect();
        let variables: VarList = values.keys().copied().collect();
        let active = values
            .values()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(idx, _)| idx)
            .collect();
        Self {
            variables: Arc::new(variables),
            active,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (var, value) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}={}", var, if value { 'V' } else { 'F' })?;
        }
        Ok(())
    }
}
