//! Plain-text rendering of truth tables

use crate::TruthTable;
use itertools::Itertools;
use std::fmt;

/// Symbols used to display truth values and separate columns.
pub struct FormatterConfig<'a> {
    s_true: &'a str,
    s_false: &'a str,
    s_sep: &'a str,
}

pub static DEFAULT_FMT_CFG: FormatterConfig = FormatterConfig {
    s_true: "V",
    s_false: "F",
    s_sep: " | ",
};

pub static TF_FMT_CFG: FormatterConfig = FormatterConfig {
    s_true: "T",
    s_false: "F",
    s_sep: " | ",
};

pub static BINARY_FMT_CFG: FormatterConfig = FormatterConfig {
    s_true: "1",
    s_false: "0",
    s_sep: " ",
};

impl FormatterConfig<'_> {
    pub fn symbol(&self, value: bool) -> &str {
        match value {
            true => self.s_true,
            false => self.s_false,
        }
    }

    pub fn table<'a>(&'a self, table: &'a TruthTable) -> TableFormatted<'a> {
        TableFormatted { table, cfg: self }
    }
}

/// Display a truth table with a custom configuration.
///
/// The header holds the variables and the formula itself, followed by one line per row.
///
/// ```
/// use proptable::{efmt, TruthTable};
/// # use proptable::TableError;
/// # fn main() -> Result<(), TableError> {
///
/// let table = TruthTable::generate("~a")?;
/// let text = format!("{}", efmt::BINARY_FMT_CFG.table(&table));
/// assert_eq!(text, "a ~a\n0 1\n1 0\n");
/// # Ok(())
/// # }
/// ```
pub struct TableFormatted<'a> {
    table: &'a TruthTable,
    cfg: &'a FormatterConfig<'a>,
}

impl TableFormatted<'_> {
    fn column_width(&self, header: usize) -> usize {
        header
            .max(self.cfg.s_true.chars().count())
            .max(self.cfg.s_false.chars().count())
    }
}

impl fmt::Display for TableFormatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cfg = self.cfg;
        let table = self.table;
        let var_width = self.column_width(1);
        let formula = table.formula().trim();

        let header = table
            .variables()
            .iter()
            .map(|v| format!("{:<w$}", v.name(), w = var_width))
            .chain(std::iter::once(formula.to_string()))
            .join(cfg.s_sep);
        writeln!(f, "{}", header)?;

        for row in table.rows() {
            let line = row
                .assignment
                .values()
                .map(|b| format!("{:<w$}", cfg.symbol(b), w = var_width))
                .chain(std::iter::once(cfg.symbol(row.value).to_string()))
                .join(cfg.s_sep);
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DEFAULT_FMT_CFG.table(self))
    }
}
