//! Wiring of one report run: fetch, extract, aggregate, emit.

use crate::{
    commands::{Cli, Commands},
    error::CliError,
};
use connectors::{
    Credentials, DataFetcher, Endpoint, EnvManager, HighlightClient, HighlightConfig, ReportScope,
};
use model::table::{
    ReportTable,
    schema::{TECHNOLOGIES_HEADER, TECHNOLOGY_HEADER},
};
use processing::{
    ExtractError,
    aggregate::{sort_by_occurrences, summarize_by_pattern, unique_applications},
    extract::{extract_cloud_patterns, extract_green_rows},
};
use report::{EmittedReport, OutputTarget, ReportCategory, ReportEmitter};
use serde_json::Value as Json;
use tracing::info;

pub const GREEN_SHEET: &str = "Green Metrics";
pub const GREEN_DETAIL_SHEET: &str = "Detailed Green Metrics";
pub const CLOUD_DETAIL_SHEET: &str = "Detailed Cloud Metrics";
pub const SUMMARY_SHEET: &str = "Summary by Rule";
pub const UNIQUE_APPS_SHEET: &str = "Pattern in Unique Apps";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Green,
    GreenSummary,
    Cloud,
}

impl From<Commands> for ReportKind {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Green => ReportKind::Green,
            Commands::GreenSummary => ReportKind::GreenSummary,
            Commands::Cloud => ReportKind::Cloud,
        }
    }
}

impl ReportKind {
    pub fn scope(&self) -> ReportScope {
        match self {
            ReportKind::Green | ReportKind::GreenSummary => ReportScope::Application,
            ReportKind::Cloud => ReportScope::Domain,
        }
    }

    pub fn category(&self) -> ReportCategory {
        match self {
            ReportKind::Green | ReportKind::GreenSummary => ReportCategory::GreenMetrics,
            ReportKind::Cloud => ReportCategory::DomainCloudMetrics,
        }
    }

    /// Turns the fetched document into the report's tables, in sheet order.
    pub fn build_tables(&self, document: &Json) -> Result<Vec<ReportTable>, ExtractError> {
        match self {
            ReportKind::Green => {
                let mut rows = extract_green_rows(document)?;
                sort_by_occurrences(&mut rows);
                Ok(vec![ReportTable::details(GREEN_SHEET, &rows)])
            }
            ReportKind::GreenSummary => {
                let mut rows = extract_green_rows(document)?;
                let summary = summarize_by_pattern(&rows);
                sort_by_occurrences(&mut rows);
                Ok(vec![
                    ReportTable::details(GREEN_DETAIL_SHEET, &rows),
                    ReportTable::summary(SUMMARY_SHEET, TECHNOLOGY_HEADER, &summary),
                ])
            }
            ReportKind::Cloud => {
                let found = extract_cloud_patterns(document)?;
                let summary = summarize_by_pattern(found.iter().map(|o| &o.row));
                let unique = unique_applications(&found);

                let mut rows: Vec<_> = found.into_iter().map(|o| o.row).collect();
                sort_by_occurrences(&mut rows);

                Ok(vec![
                    ReportTable::details(CLOUD_DETAIL_SHEET, &rows),
                    ReportTable::summary(SUMMARY_SHEET, TECHNOLOGIES_HEADER, &summary),
                    ReportTable::unique_applications(
                        UNIQUE_APPS_SHEET,
                        &unique.rows,
                        unique.applications_overall,
                    ),
                ])
            }
        }
    }
}

fn output_target(category: ReportCategory, endpoint: &Endpoint) -> OutputTarget {
    match endpoint {
        Endpoint::Application {
            domain_id,
            application_id,
        } => OutputTarget::application(category, domain_id, application_id),
        Endpoint::CloudRequirements { domain_id } => OutputTarget::domain(category, domain_id),
    }
}

/// Runs one report end to end. Nothing is written unless every earlier
/// stage succeeded.
pub fn run_report(
    kind: ReportKind,
    credentials: &Credentials,
    fetcher: &dyn DataFetcher,
    emitter: &ReportEmitter,
) -> Result<EmittedReport, CliError> {
    info!("Building {kind:?} report");

    let document = fetcher.fetch(&credentials.endpoint)?;
    let tables = kind.build_tables(&document)?;

    let target = output_target(kind.category(), &credentials.endpoint);
    Ok(emitter.emit(&target, &tables)?)
}

/// Loads the config, applies environment overrides and runs the command
/// against the live API.
pub fn run(cli: &Cli, env: &EnvManager) -> Result<EmittedReport, CliError> {
    let kind = ReportKind::from(cli.command);

    let config = HighlightConfig::load(&cli.config)?.with_env_overrides(env);
    let credentials = config.resolve(kind.scope())?;
    info!("Using config {}: {credentials:?}", cli.config.display());

    let client = HighlightClient::new(&credentials)?;
    let emitter = ReportEmitter::new(&cli.output_dir);
    run_report(kind, &credentials, &client, &emitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectors::FetchError;
    use serde_json::json;
    use std::cell::RefCell;

    struct StaticFetcher {
        document: Json,
        requested: RefCell<Vec<Endpoint>>,
    }

    impl StaticFetcher {
        fn new(document: Json) -> Self {
            StaticFetcher {
                document,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl DataFetcher for StaticFetcher {
        fn fetch(&self, endpoint: &Endpoint) -> Result<Json, FetchError> {
            self.requested.borrow_mut().push(endpoint.clone());
            Ok(self.document.clone())
        }
    }

    fn green_document() -> Json {
        json!({
            "metrics": [{
                "greenDetail": [{
                    "technology": "Java",
                    "greenIndexDetails": [
                        { "greenRequirement": { "display": "P1" }, "greenOccurrences": 2, "greenEffort": 480 },
                        { "greenRequirement": { "display": "P2" }, "greenOccurrences": 6, "greenEffort": 60 }
                    ]
                }]
            }]
        })
    }

    fn app_credentials() -> Credentials {
        Credentials {
            base_url: "http://localhost".into(),
            api_key: "k".into(),
            endpoint: Endpoint::Application {
                domain_id: "1".into(),
                application_id: "2".into(),
            },
        }
    }

    #[test]
    fn test_green_has_one_sorted_sheet() {
        let tables = ReportKind::Green.build_tables(&green_document()).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].sheet_name, GREEN_SHEET);
        assert_eq!(tables[0].rows[0][0], model::core::value::Value::from("P2"));
    }

    #[test]
    fn test_green_summary_sheets() {
        let tables = ReportKind::GreenSummary
            .build_tables(&green_document())
            .unwrap();
        let names: Vec<_> = tables.iter().map(|t| t.sheet_name.as_str()).collect();
        assert_eq!(names, vec![GREEN_DETAIL_SHEET, SUMMARY_SHEET]);
        assert_eq!(tables[1].columns[1].header, TECHNOLOGY_HEADER);
    }

    #[test]
    fn test_cloud_sheets() {
        let doc = json!([{
            "display": "P1",
            "techno": { "display": "Java" },
            "roadBlocks": 1,
            "cloudEffort": 30,
            "applications": [{ "name": "a" }]
        }]);
        let tables = ReportKind::Cloud.build_tables(&doc).unwrap();
        let names: Vec<_> = tables.iter().map(|t| t.sheet_name.as_str()).collect();
        assert_eq!(
            names,
            vec![CLOUD_DETAIL_SHEET, SUMMARY_SHEET, UNIQUE_APPS_SHEET]
        );
        assert_eq!(tables[1].columns[1].header, TECHNOLOGIES_HEADER);
    }

    #[test]
    fn test_run_report_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let emitter = ReportEmitter::new(dir.path());
        let fetcher = StaticFetcher::new(green_document());
        let creds = app_credentials();

        let report = run_report(ReportKind::GreenSummary, &creds, &fetcher, &emitter).unwrap();

        assert_eq!(fetcher.requested.borrow().as_slice(), &[creds.endpoint.clone()]);
        let name = report.path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("green_metrics_d1_a2_"));
        assert!(report.path.exists());
    }

    #[test]
    fn test_no_rows_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output");
        let emitter = ReportEmitter::new(&out);
        let fetcher = StaticFetcher::new(json!({ "metrics": [] }));

        let err = run_report(ReportKind::Green, &app_credentials(), &fetcher, &emitter).unwrap_err();

        assert!(matches!(err, CliError::Extract(ExtractError::NoData(_))));
        assert!(!out.exists());
    }
}
