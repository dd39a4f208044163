use crate::{
    core::value::Value,
    records::row::{DetailRow, SummaryRow, UniqueApplicationRow},
    table::schema::{
        ALL_PATTERNS_LABEL, Column, ColumnKind, detail_columns, summary_columns,
        unique_application_columns,
    },
};
use serde::Serialize;

/// How a table is closed off when emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Footer {
    /// A `TOTAL` row summing the summed columns.
    Total,
    /// A fixed trailing row, emitted as given.
    Row(Vec<Value>),
}

/// One sheet worth of rows with a fixed column schema. Rows are already in
/// their final order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub sheet_name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
    pub footer: Footer,
}

impl ReportTable {
    pub fn details(sheet_name: &str, rows: &[DetailRow]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                vec![
                    Value::from(row.pattern.as_str()),
                    Value::from(row.technology.as_str()),
                    Value::from(row.occurrences),
                    Value::from(row.effort_person_days),
                    Value::from(row.cost_per_day),
                    Value::from(row.tech_debt),
                ]
            })
            .collect();

        ReportTable {
            sheet_name: sheet_name.to_string(),
            columns: detail_columns(),
            rows,
            footer: Footer::Total,
        }
    }

    pub fn summary(sheet_name: &str, technology_header: &str, rows: &[SummaryRow]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                vec![
                    Value::from(row.pattern.as_str()),
                    Value::from(row.technologies_label()),
                    Value::from(row.total_occurrences),
                ]
            })
            .collect();

        ReportTable {
            sheet_name: sheet_name.to_string(),
            columns: summary_columns(technology_header),
            rows,
            footer: Footer::Total,
        }
    }

    /// Per-pattern application counts, closed by the count of distinct
    /// applications across every pattern.
    pub fn unique_applications(
        sheet_name: &str,
        rows: &[UniqueApplicationRow],
        applications_overall: usize,
    ) -> Self {
        let body = rows
            .iter()
            .map(|row| {
                vec![
                    Value::from(row.pattern.as_str()),
                    Value::from(row.unique_application_count),
                ]
            })
            .collect();

        ReportTable {
            sheet_name: sheet_name.to_string(),
            columns: unique_application_columns(),
            rows: body,
            footer: Footer::Row(vec![
                Value::from(ALL_PATTERNS_LABEL),
                Value::from(applications_overall),
            ]),
        }
    }

    pub fn column_index(&self, kind: ColumnKind) -> Option<usize> {
        self.columns.iter().position(|c| c.kind == kind)
    }

    /// Sum of a column over the body rows, ignoring non-numeric cells.
    pub fn column_sum(&self, index: usize) -> f64 {
        self.rows
            .iter()
            .filter_map(|row| row.get(index).and_then(Value::as_f64))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(pattern: &str, occurrences: u64, effort: f64) -> DetailRow {
        DetailRow {
            pattern: pattern.to_string(),
            technology: "Java".to_string(),
            occurrences,
            effort_person_days: effort,
            cost_per_day: None,
            tech_debt: None,
        }
    }

    #[test]
    fn test_details_table_layout() {
        let table = ReportTable::details("Green Metrics", &[detail("P1", 10, 1.5)]);

        assert_eq!(table.columns.len(), 6);
        assert_eq!(table.rows[0][0], Value::from("P1"));
        assert_eq!(table.rows[0][2], Value::Int(10));
        assert_eq!(table.rows[0][4], Value::Null);
        assert_eq!(table.rows[0][5], Value::Null);
        assert_eq!(table.footer, Footer::Total);
    }

    #[test]
    fn test_column_sum_counts_only_numbers() {
        let table = ReportTable::details(
            "Green Metrics",
            &[detail("P1", 10, 1.5), detail("P2", 5, 0.25)],
        );

        let occurrences = table.column_index(ColumnKind::Count).unwrap();
        let cost = table.column_index(ColumnKind::Cost).unwrap();
        assert_eq!(table.column_sum(occurrences), 15.0);
        assert_eq!(table.column_sum(cost), 0.0);
    }

    #[test]
    fn test_unique_applications_footer() {
        let rows = vec![UniqueApplicationRow {
            pattern: "P1".to_string(),
            unique_application_count: 2,
        }];
        let table = ReportTable::unique_applications("Pattern in Unique Apps", &rows, 3);

        assert_eq!(
            table.footer,
            Footer::Row(vec![Value::from(ALL_PATTERNS_LABEL), Value::Int(3)])
        );
    }
}
