use crate::core::value::Value;
use serde::Serialize;
use std::fmt;

/// Zero-based cell coordinates. Displays in A1 notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRef {
    pub row: u32,
    pub col: u16,
}

impl CellRef {
    pub fn new(row: u32, col: u16) -> Self {
        CellRef { row, col }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.col), self.row + 1)
    }
}

/// Spreadsheet column name for a zero-based index: 0 -> `A`, 26 -> `AA`.
pub fn column_letter(col: u16) -> String {
    let mut n = u32::from(col) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push(char::from(b'A' + rem));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// A live formula computed by the spreadsheet application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Formula {
    /// `=ROUND(left*right, digits)`
    RoundProduct {
        left: CellRef,
        right: CellRef,
        digits: u8,
    },
    /// `=SUM(first:last)`
    SumRange { first: CellRef, last: CellRef },
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::RoundProduct {
                left,
                right,
                digits,
            } => write!(f, "=ROUND({left}*{right}, {digits})"),
            Formula::SumRange { first, last } => write!(f, "=SUM({first}:{last})"),
        }
    }
}

/// Content of one output cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OutputCell {
    Literal(Value),
    Formula(Formula),
}

impl OutputCell {
    pub fn literal(&self) -> Option<&Value> {
        match self {
            OutputCell::Literal(value) => Some(value),
            OutputCell::Formula(_) => None,
        }
    }
}

impl From<Value> for OutputCell {
    fn from(value: Value) -> Self {
        OutputCell::Literal(value)
    }
}

impl From<Formula> for OutputCell {
    fn from(formula: Formula) -> Self {
        OutputCell::Formula(formula)
    }
}
