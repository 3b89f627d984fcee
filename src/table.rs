//! Truth tables of propositional formulae

use crate::*;
use std::sync::Arc;

/// One row of a truth table: the values of the variables and the value of the formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTableRow {
    pub assignment: Assignment,
    pub value: bool,
}

/// The full truth table of a formula.
///
/// Columns are the distinct variables of the formula in ascending order. Row `i` assigns
/// the binary representation of `i` to the variables, the first variable being the most significant bit.
///
/// ```
/// use proptable::TruthTable;
/// # use proptable::TableError;
/// # fn main() -> Result<(), TableError> {
///
/// let table = TruthTable::generate("a & b")?;
/// assert_eq!(table.variables().len(), 2);
///
/// let values: Vec<bool> = table.rows().iter().map(|r| r.value).collect();
/// assert_eq!(values, vec![false, false, false, true]);
/// assert!(table.is_satisfiable());
/// assert!(!table.is_tautology());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TruthTable {
    formula: String,
    variables: Arc<VarList>,
    postfix: Postfix,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Generate the table of a formula with the default limits
    pub fn generate(formula: &str) -> Result<Self, TableError> {
        Self::generate_with_limits(formula, &Limits::default())
    }

    /// Generate the table of a formula.
    ///
    /// The formula is converted once and evaluated for every row. Any failure aborts the
    /// generation: no partial table is returned.
    pub fn generate_with_limits(formula: &str, limits: &Limits) -> Result<Self, TableError> {
        let variables = Arc::new(VarList::from_formula(formula));
        let n = variables.len();
        let row_count = limits.row_count(n).ok_or_else(|| {
            log::warn!("{} variables exceed the limit of {}", n, limits.max_variables);
            TableError::TooManyVariables {
                found: n,
                max: limits.max_variables,
            }
        })?;

        let postfix = to_postfix(formula)?;
        log::debug!("generating {} rows for {} variables", row_count, n);

        let rows = (0..row_count)
            .map(|i| {
                let assignment = Assignment::from_row(&variables, i);
                let value = postfix.eval(&assignment)?;
                Ok(TruthTableRow { assignment, value })
            })
            .collect::<Result<Vec<_>, TableError>>()?;

        Ok(Self {
            formula: formula.to_string(),
            variables,
            postfix,
            rows,
        })
    }

    /// The source formula
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The variables, in column order
    pub fn variables(&self) -> &VarList {
        &self.variables
    }

    /// The converted formula
    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    /// All rows, in ascending order of their index
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// The rows where the formula is true
    pub fn models(&self) -> impl Iterator<Item = &TruthTableRow> {
        self.rows.iter().filter(|r| r.value)
    }

    /// The formula is true in all rows
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|r| r.value)
    }

    /// The formula is false in all rows
    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    /// The formula is true in at least one row
    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|r| r.value)
    }
}

/// Generate the truth table of a formula
pub fn generate_truth_table(formula: &str) -> Result<TruthTable, TableError> {
    TruthTable::generate(formula)
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn values(table: &TruthTable) -> Vec<bool> {
        table.rows().iter().map(|r| r.value).collect()
    }

    fn row_values(row: &TruthTableRow) -> Vec<bool> {
        row.assignment.values().collect()
    }

    const V: bool = true;
    const F: bool = false;

    #[test]
    fn single_variable() -> Result<(), TableError> {
        let table = generate_truth_table("a")?;
        assert_eq!(format!("{}", table.variables()), "a");
        assert_eq!(table.rows().len(), 2);
        assert_eq!(row_values(&table.rows()[0]), vec![F]);
        assert_eq!(row_values(&table.rows()[1]), vec![V]);
        assert_eq!(values(&table), vec![F, V]);
        Ok(())
    }

    #[test]
    fn conjunction() -> Result<(), TableError> {
        let table = generate_truth_table("a&b")?;
        let rows: Vec<Vec<bool>> = table.rows().iter().map(row_values).collect();
        assert_eq!(rows, vec![vec![F, F], vec![F, V], vec![V, F], vec![V, V]]);
        assert_eq!(values(&table), vec![F, F, F, V]);
        Ok(())
    }

    #[test]
    fn negation() -> Result<(), TableError> {
        let table = generate_truth_table("~a")?;
        assert_eq!(values(&table), vec![V, F]);
        Ok(())
    }

    #[test]
    fn implication() -> Result<(), TableError> {
        let table = generate_truth_table("a=>b")?;
        assert_eq!(values(&table), vec![V, V, F, V]);
        Ok(())
    }

    #[test]
    fn mixed() -> Result<(), TableError> {
        let table = generate_truth_table("(a|b)&~c")?;
        assert_eq!(table.rows().len(), 8);

        let row = table
            .rows()
            .iter()
            .find(|r| row_values(r) == vec![V, F, F])
            .unwrap();
        assert!(row.value);

        let row = table
            .rows()
            .iter()
            .find(|r| row_values(r) == vec![F, F, V])
            .unwrap();
        assert!(!row.value);

        assert_eq!(values(&table), vec![F, F, V, F, V, F, V, F]);
        assert_eq!(table.models().count(), 3);
        Ok(())
    }

    #[test]
    fn row_order() -> Result<(), TableError> {
        let table = generate_truth_table("d | b & ~a => c")?;
        assert_eq!(format!("{}", table.variables()), "a b c d");
        assert_eq!(table.rows().len(), 16);
        for (i, row) in table.rows().iter().enumerate() {
            let bits: Vec<bool> = (0..4).rev().map(|k| (i >> k) & 1 == 1).collect();
            assert_eq!(row_values(row), bits);
        }
        Ok(())
    }

    #[test]
    fn classification() -> Result<(), TableError> {
        assert!(generate_truth_table("a | ~a")?.is_tautology());
        assert!(generate_truth_table("a & ~a")?.is_contradiction());
        assert!(generate_truth_table("(a => b) <=> (~b => ~a)")?.is_tautology());
        let table = generate_truth_table("a <=> b")?;
        assert!(table.is_satisfiable() && !table.is_tautology());
        Ok(())
    }

    #[test]
    fn errors() {
        assert_eq!(
            generate_truth_table("").unwrap_err(),
            TableError::EmptyFormula
        );
        assert_eq!(
            generate_truth_table(" + - 1 ").unwrap_err(),
            TableError::EmptyFormula
        );
        assert_eq!(
            generate_truth_table("(a | b").unwrap_err(),
            TableError::UnmatchedParenthesis
        );
        assert_eq!(
            generate_truth_table("a & b)").unwrap_err(),
            TableError::UnmatchedParenthesis
        );
        assert_eq!(
            generate_truth_table("a & | b").unwrap_err(),
            TableError::StackUnderflow(Operator::And)
        );
        assert_eq!(
            generate_truth_table("ab & c").unwrap_err(),
            TableError::MalformedExpression(2)
        );
        assert_eq!(
            generate_truth_table("~").unwrap_err(),
            TableError::StackUnderflow(Operator::Not)
        );
    }

    #[test]
    fn limits() -> Result<(), TableError> {
        let formula = "a & b & c & d & e & f & g & h & i";
        assert_eq!(
            TruthTable::generate_with_limits(formula, &Limits::strict()).unwrap_err(),
            TableError::TooManyVariables { found: 9, max: 8 }
        );
        let table = TruthTable::generate_with_limits(formula, &Limits::default())?;
        assert_eq!(table.rows().len(), 512);
        assert_eq!(table.models().count(), 1);
        Ok(())
    }
}
