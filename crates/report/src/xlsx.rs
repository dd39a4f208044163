use crate::{
    error::ReportError,
    layout::{CellStyle, PlacedCell, SheetLayout},
};
use model::core::{cell::OutputCell, value::Value};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

/// Renders the sheets into an in-memory `.xlsx` file.
pub fn render_workbook(sheets: &[SheetLayout]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for cell in &sheet.cells {
            write_cell(worksheet, cell)?;
        }

        for (col, width) in sheet.column_widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn format_for(style: &CellStyle) -> Format {
    let mut format = Format::new();
    if style.bold {
        format = format.set_bold();
    }
    if let Some(num_format) = style.number_format {
        format = format.set_num_format(num_format);
    }
    format
}

fn write_cell(worksheet: &mut Worksheet, cell: &PlacedCell) -> Result<(), XlsxError> {
    let (row, col) = (cell.at.row, cell.at.col);
    let format = format_for(&cell.style);

    match &cell.content {
        OutputCell::Formula(formula) => {
            worksheet.write_formula_with_format(row, col, formula.to_string().as_str(), &format)?;
        }
        OutputCell::Literal(Value::String(text)) => {
            worksheet.write_string_with_format(row, col, text, &format)?;
        }
        OutputCell::Literal(Value::Null) => {
            worksheet.write_blank(row, col, &format)?;
        }
        OutputCell::Literal(value) => match value.as_f64() {
            Some(number) => {
                worksheet.write_number_with_format(row, col, number, &format)?;
            }
            None => {
                worksheet.write_string_with_format(row, col, value.to_string(), &format)?;
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{records::row::DetailRow, table::ReportTable};

    #[test]
    fn test_renders_zip_container() {
        let rows = vec![DetailRow {
            pattern: "P1".into(),
            technology: "Java".into(),
            occurrences: 3,
            effort_person_days: 0.5,
            cost_per_day: None,
            tech_debt: None,
        }];
        let sheets = vec![
            SheetLayout::from_table(&ReportTable::details("Detailed Green Metrics", &rows)),
            SheetLayout::from_table(&ReportTable::summary(
                "Summary by Rule",
                "Technology",
                &[],
            )),
        ];

        let bytes = render_workbook(&sheets).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_duplicate_sheet_names_are_rejected() {
        let table = ReportTable::summary("Summary by Rule", "Technology", &[]);
        let sheets = vec![
            SheetLayout::from_table(&table),
            SheetLayout::from_table(&table),
        ];

        let err = render_workbook(&sheets).unwrap_err();
        assert!(matches!(err, ReportError::Workbook(_)));
    }
}
