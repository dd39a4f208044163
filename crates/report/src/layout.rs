//! Placement of a [`ReportTable`] onto a grid of cells.
//!
//! Layouts are independent of any spreadsheet library: every cell is an
//! [`OutputCell`] with a style, and the xlsx writer only renders them.

use model::{
    core::{
        cell::{CellRef, Formula, OutputCell},
        effort::{EFFORT_DECIMALS, round_to},
        value::Value,
    },
    table::{ColumnKind, Footer, ReportTable, schema::TOTAL_LABEL},
};

pub const NUMBER_FORMAT: &str = "0.00";
const NUMBER_DECIMALS: usize = 2;
const WIDTH_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub bold: bool,
    pub number_format: Option<&'static str>,
}

impl CellStyle {
    fn for_column(kind: ColumnKind, bold: bool) -> Self {
        CellStyle {
            bold,
            number_format: kind.is_numeric().then_some(NUMBER_FORMAT),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    pub at: CellRef,
    pub content: OutputCell,
    pub style: CellStyle,
}

/// Cells and column widths of one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub name: String,
    pub cells: Vec<PlacedCell>,
    pub column_widths: Vec<f64>,
}

impl SheetLayout {
    /// Lays out a header row, the body rows and the footer. Nothing is ever
    /// placed in the cost column below its header.
    pub fn from_table(table: &ReportTable) -> Self {
        let mut cells = Vec::new();

        for (col, column) in table.columns.iter().enumerate() {
            cells.push(PlacedCell {
                at: CellRef::new(0, col as u16),
                content: OutputCell::from(Value::from(column.header.as_str())),
                style: CellStyle {
                    bold: true,
                    number_format: None,
                },
            });
        }

        let effort_col = table.column_index(ColumnKind::Effort);
        let cost_col = table.column_index(ColumnKind::Cost);

        for (index, row) in table.rows.iter().enumerate() {
            let sheet_row = index as u32 + 1;
            for (col, column) in table.columns.iter().enumerate() {
                let content = match (column.kind, effort_col, cost_col) {
                    (ColumnKind::Cost, _, _) => continue,
                    (ColumnKind::TechDebt, Some(effort), Some(cost)) => {
                        OutputCell::Formula(Formula::RoundProduct {
                            left: CellRef::new(sheet_row, effort as u16),
                            right: CellRef::new(sheet_row, cost as u16),
                            digits: NUMBER_DECIMALS as u8,
                        })
                    }
                    _ => OutputCell::from(row.get(col).cloned().unwrap_or(Value::Null)),
                };

                cells.push(PlacedCell {
                    at: CellRef::new(sheet_row, col as u16),
                    content,
                    style: CellStyle::for_column(column.kind, false),
                });
            }
        }

        let footer_row = table.rows.len() as u32 + 1;
        match &table.footer {
            Footer::Total => cells.extend(total_row(table, footer_row)),
            Footer::Row(values) => {
                for (col, column) in table.columns.iter().enumerate() {
                    cells.push(PlacedCell {
                        at: CellRef::new(footer_row, col as u16),
                        content: OutputCell::from(values.get(col).cloned().unwrap_or(Value::Null)),
                        style: CellStyle::for_column(column.kind, true),
                    });
                }
            }
        }

        let column_widths = column_widths(table, &cells);
        SheetLayout {
            name: table.sheet_name.clone(),
            cells,
            column_widths,
        }
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&PlacedCell> {
        self.cells.iter().find(|c| c.at == CellRef::new(row, col))
    }

    pub fn last_row(&self) -> u32 {
        self.cells.iter().map(|c| c.at.row).max().unwrap_or(0)
    }
}

fn total_row(table: &ReportTable, sheet_row: u32) -> Vec<PlacedCell> {
    let body_rows = table.rows.len() as u32;
    let mut cells = Vec::with_capacity(table.columns.len());

    for (col, column) in table.columns.iter().enumerate() {
        let content = if col == 0 {
            OutputCell::from(Value::from(TOTAL_LABEL))
        } else {
            match column.kind {
                ColumnKind::Count => {
                    OutputCell::from(Value::Int(table.column_sum(col).round() as i64))
                }
                ColumnKind::Effort => {
                    OutputCell::from(Value::Float(round_to(table.column_sum(col), EFFORT_DECIMALS)))
                }
                ColumnKind::TechDebt if body_rows > 0 => OutputCell::Formula(Formula::SumRange {
                    first: CellRef::new(1, col as u16),
                    last: CellRef::new(body_rows, col as u16),
                }),
                ColumnKind::Text | ColumnKind::Cost | ColumnKind::Metric | ColumnKind::TechDebt => {
                    continue;
                }
            }
        };

        cells.push(PlacedCell {
            at: CellRef::new(sheet_row, col as u16),
            content,
            style: CellStyle::for_column(column.kind, true),
        });
    }

    cells
}

/// Longest rendered literal per column plus padding. Formulas do not count.
fn column_widths(table: &ReportTable, cells: &[PlacedCell]) -> Vec<f64> {
    let mut widths = vec![0usize; table.columns.len()];

    for cell in cells {
        let Some(value) = cell.content.literal() else {
            continue;
        };
        let col = cell.at.col as usize;
        let decimals = cell.style.number_format.map(|_| NUMBER_DECIMALS);
        let len = value.render(decimals).chars().count();
        if let Some(width) = widths.get_mut(col) {
            *width = (*width).max(len);
        }
    }

    widths
        .into_iter()
        .map(|w| (w + WIDTH_PADDING) as f64)
        .collect()
}
