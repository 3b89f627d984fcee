//! Evaluate propositional formulae and enumerate their truth tables.
//!
//! A formula combines single-letter [variables](Variable) with the following [operators](Operator),
//! from the tightest to the loosest binding:
//!
//! | Symbol | Meaning | Associativity |
//! |--------|---------|---------------|
//! | `~`    | NOT     | right         |
//! | `&`    | AND     | left          |
//! | `\|`   | OR      | left          |
//! | `=>`   | IMPLIES | right         |
//! | `<=>`  | IFF     | left          |
//!
//! Parentheses can be used for grouping, whitespace and unknown characters are ignored.
//!
//! # Evaluating a formula
//!
//! The formula is first split into [tokens](Token), then converted into a [postfix sequence](Postfix)
//! which does not depend on the value of the variables. The postfix sequence is then evaluated for
//! an [assignment](Assignment) of values to the variables.
//!
//! ```
//! use proptable::{tokenize, Assignment, Postfix, Variable};
//! # use proptable::TableError;
//! # fn main() -> Result<(), TableError> {
//!
//! let postfix = Postfix::from_tokens(tokenize("a & b | ~c"))?;
//!
//! let assignment: Assignment = [('a', true), ('b', false), ('c', false)]
//!     .into_iter()
//!     .map(|(c, b)| Variable::try_from(c).map(|v| (v, b)))
//!     .collect::<Result<_, TableError>>()?;
//!
//! assert!(postfix.eval(&assignment)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Truth tables
//!
//! A [truth table](TruthTable) enumerates all assignments of the variables of a formula.
//! Variables are sorted and the first one is the most significant bit of the row index:
//! the first row has all variables false, the last one has all variables true.
//!
//! ```
//! use proptable::generate_truth_table;
//! # use proptable::TableError;
//! # fn main() -> Result<(), TableError> {
//!
//! let table = generate_truth_table("a => b")?;
//! assert_eq!(table.rows().len(), 4);
//! assert_eq!(format!("{}", table), "a | b | a => b\nF | F | V\nF | V | V\nV | F | F\nV | V | V\n");
//! # Ok(())
//! # }
//! ```
//!
//! The number of rows doubles with each variable, the generation is bounded by configurable [Limits].

mod convert;
pub mod efmt;
mod error;
mod eval;
mod limits;
mod parse;
mod states;
mod table;
mod token;
mod variable;

// Export public structures and API
pub use convert::{to_postfix, Postfix};
pub use error::TableError;
pub use eval::{evaluate, evaluate_formula};
pub use limits::Limits;
pub use parse::{tokenize, Tokens};
pub use states::Assignment;
pub use table::{generate_truth_table, TruthTable, TruthTableRow};
pub use token::{Associativity, Operator, Token};
pub use variable::{VarList, Variable};
