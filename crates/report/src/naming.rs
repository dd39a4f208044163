use chrono::NaiveDateTime;
use std::fmt;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const EXTENSION: &str = "xlsx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCategory {
    GreenMetrics,
    DomainCloudMetrics,
}

impl ReportCategory {
    pub fn prefix(&self) -> &'static str {
        match self {
            ReportCategory::GreenMetrics => "green_metrics",
            ReportCategory::DomainCloudMetrics => "domain_cloud_metrics",
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// What a report is about: its category and the identifiers that scope it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub category: ReportCategory,
    pub domain_id: String,
    pub application_id: Option<String>,
}

impl OutputTarget {
    pub fn application(category: ReportCategory, domain_id: &str, application_id: &str) -> Self {
        OutputTarget {
            category,
            domain_id: domain_id.to_string(),
            application_id: Some(application_id.to_string()),
        }
    }

    pub fn domain(category: ReportCategory, domain_id: &str) -> Self {
        OutputTarget {
            category,
            domain_id: domain_id.to_string(),
            application_id: None,
        }
    }

    /// `<prefix>_d<domain>[_a<application>]_<YYYYMMDD_HHMMSS>.xlsx`
    pub fn file_name(&self, at: NaiveDateTime) -> String {
        let mut name = format!("{}_d{}", self.category, sanitize(&self.domain_id));
        if let Some(app) = &self.application_id {
            name.push_str(&format!("_a{}", sanitize(app)));
        }
        format!("{name}_{}.{EXTENSION}", at.format(TIMESTAMP_FORMAT))
    }
}

// Identifiers end up in a file name; path separators would escape the output dir.
fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}
