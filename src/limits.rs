//! Bounds on truth table generation

/// Resource limits for truth table generation.
///
/// A table with `n` variables has `2^n` rows: the limit on the number of variables
/// is checked before any row is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of distinct variables in a formula.
    pub max_variables: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_variables: 20 }
    }
}

impl Limits {
    /// Create limits with a custom number of variables.
    pub fn new(max_variables: usize) -> Self {
        Self { max_variables }
    }

    /// Large tables, for batch use.
    pub fn permissive() -> Self {
        Self { max_variables: 32 }
    }

    /// Small tables, for interactive display.
    pub fn strict() -> Self {
        Self { max_variables: 8 }
    }

    /// Number of rows of a table with the given number of variables, if it fits the limits
    pub fn row_count(&self, variables: usize) -> Option<u64> {
        match variables <= self.max_variables && variables < u64::BITS as usize {
            true => Some(1u64 << variables),
            false => None,
        }
    }
}
