use serde::Serialize;

pub const PATTERN_HEADER: &str = "Rule/Pattern";
pub const TECHNOLOGY_HEADER: &str = "Technology";
pub const TECHNOLOGIES_HEADER: &str = "Technologies";
pub const OCCURRENCES_HEADER: &str = "Number of Occurrences";
pub const EFFORT_HEADER: &str = "Effort by Occurrence (Person-day)";
pub const COST_HEADER: &str = "Cost (FTE/Day)";
pub const TECH_DEBT_HEADER: &str = "Tech Debt ($) Effort x Cost";
pub const UNIQUE_APPLICATIONS_HEADER: &str = "Unique Applications";

/// Label of the synthesized total row.
pub const TOTAL_LABEL: &str = "TOTAL";
/// Label of the trailing row of the unique applications sheet.
pub const ALL_PATTERNS_LABEL: &str = "Unique apps across all patterns";

/// What a column holds and how the emitter treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    Text,
    /// Occurrence count, summed in the total row.
    Count,
    /// Person-days, summed in the total row.
    Effort,
    /// Daily rate typed in by the reader. Always left blank.
    Cost,
    /// Effort times cost, as a live formula.
    TechDebt,
    /// Numeric but not summed.
    Metric,
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnKind::Count | ColumnKind::Effort | ColumnKind::TechDebt | ColumnKind::Metric
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub header: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(header: &str, kind: ColumnKind) -> Self {
        Column {
            header: header.to_string(),
            kind,
        }
    }
}

/// Columns of a detail sheet.
pub fn detail_columns() -> Vec<Column> {
    vec![
        Column::new(PATTERN_HEADER, ColumnKind::Text),
        Column::new(TECHNOLOGY_HEADER, ColumnKind::Text),
        Column::new(OCCURRENCES_HEADER, ColumnKind::Count),
        Column::new(EFFORT_HEADER, ColumnKind::Effort),
        Column::new(COST_HEADER, ColumnKind::Cost),
        Column::new(TECH_DEBT_HEADER, ColumnKind::TechDebt),
    ]
}

/// Columns of a summary-by-rule sheet. The technology header differs between
/// report variants.
pub fn summary_columns(technology_header: &str) -> Vec<Column> {
    vec![
        Column::new(PATTERN_HEADER, ColumnKind::Text),
        Column::new(technology_header, ColumnKind::Text),
        Column::new(OCCURRENCES_HEADER, ColumnKind::Count),
    ]
}

pub fn unique_application_columns() -> Vec<Column> {
    vec![
        Column::new(PATTERN_HEADER, ColumnKind::Text),
        Column::new(UNIQUE_APPLICATIONS_HEADER, ColumnKind::Metric),
    ]
}
