use crate::{
    error::ReportError,
    layout::SheetLayout,
    naming::{DEFAULT_OUTPUT_DIR, OutputTarget},
    xlsx::render_workbook,
};
use chrono::Local;
use model::{
    core::cell::column_letter,
    table::{ColumnKind, ReportTable},
};
use std::{fs, path::PathBuf};
use tracing::{debug, info};

/// A workbook that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedReport {
    pub path: PathBuf,
    /// Letter of the cost column left for the user to fill in, if any sheet has one.
    pub cost_column: Option<String>,
}

/// Writes report tables as one workbook per run.
#[derive(Debug, Clone)]
pub struct ReportEmitter {
    output_dir: PathBuf,
}

impl Default for ReportEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl ReportEmitter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ReportEmitter {
            output_dir: output_dir.into(),
        }
    }

    /// Lays out every table as a sheet, in order, and writes the workbook.
    /// The file only appears once the whole workbook has been rendered.
    pub fn emit(
        &self,
        target: &OutputTarget,
        tables: &[ReportTable],
    ) -> Result<EmittedReport, ReportError> {
        let sheets: Vec<SheetLayout> = tables.iter().map(SheetLayout::from_table).collect();
        for sheet in &sheets {
            debug!("Sheet '{}': {} cells", sheet.name, sheet.cells.len());
        }

        let bytes = render_workbook(&sheets)?;

        let path = self
            .output_dir
            .join(target.file_name(Local::now().naive_local()));

        fs::create_dir_all(&self.output_dir).map_err(|source| ReportError::Write {
            path: self.output_dir.clone(),
            source,
        })?;
        fs::write(&path, bytes).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;

        info!("Wrote {} sheet(s) to {}", sheets.len(), path.display());

        Ok(EmittedReport {
            path,
            cost_column: cost_column(tables),
        })
    }
}

fn cost_column(tables: &[ReportTable]) -> Option<String> {
    tables.iter().find_map(|table| {
        table
            .column_index(ColumnKind::Cost)
            .map(|col| column_letter(col as u16))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::ReportCategory;
    use model::records::row::{DetailRow, SummaryRow};

    fn detail() -> DetailRow {
        DetailRow {
            pattern: "Avoid N+1 queries".into(),
            technology: "Java".into(),
            occurrences: 4,
            effort_person_days: 0.5,
            cost_per_day: None,
            tech_debt: None,
        }
    }

    #[test]
    fn test_emit_writes_workbook_into_new_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("output");
        let emitter = ReportEmitter::new(&out);
        let target = OutputTarget::application(ReportCategory::GreenMetrics, "1", "2");

        let report = emitter
            .emit(&target, &[ReportTable::details("Green Metrics", &[detail()])])
            .unwrap();

        assert!(report.path.starts_with(&out));
        let name = report.path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("green_metrics_d1_a2_"));
        assert!(name.ends_with(".xlsx"));

        let bytes = fs::read(&report.path).unwrap();
        assert!(bytes.starts_with(b"PK"));
        assert_eq!(report.cost_column.as_deref(), Some("E"));
    }

    #[test]
    fn test_summary_only_workbook_has_no_cost_column() {
        let dir = tempfile::tempdir().unwrap();
        let emitter = ReportEmitter::new(dir.path());
        let target = OutputTarget::domain(ReportCategory::DomainCloudMetrics, "9");

        let report = emitter
            .emit(
                &target,
                &[ReportTable::summary("Summary by Rule", "Technologies", &[SummaryRow::new("P")])],
            )
            .unwrap();
        assert_eq!(report.cost_column, None);
    }

    #[test]
    fn test_render_failure_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output");
        let emitter = ReportEmitter::new(&out);
        let target = OutputTarget::domain(ReportCategory::DomainCloudMetrics, "9");
        let table = ReportTable::summary("Summary by Rule", "Technologies", &[]);

        let err = emitter.emit(&target, &[table.clone(), table]).unwrap_err();
        assert!(matches!(err, ReportError::Workbook(_)));
        assert!(!out.exists());
    }
}
