use crate::{
    error::ExtractError,
    filter::{FilterChain, UnattachedPatternFilter, ZeroOccurrenceFilter},
};
use model::records::{raw::CloudPatternRecord, row::DetailRow};
use serde::Deserialize;
use serde_json::Value as Json;
use tracing::{debug, info};

pub const UNEXPECTED_FORMAT: &str = "Unexpected or empty response format.";

/// A cloud pattern row together with the applications it was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternOccurrence {
    pub row: DetailRow,
    pub applications: Vec<String>,
}

/// Rows of a domain cloud requirements document, in payload order. Patterns
/// without occurrences or without applications are dropped.
pub fn extract_cloud_patterns(document: &Json) -> Result<Vec<PatternOccurrence>, ExtractError> {
    let items = match document {
        Json::Array(items) if !items.is_empty() => items,
        _ => return Err(ExtractError::no_data(UNEXPECTED_FORMAT)),
    };

    let filters: FilterChain<'_, CloudPatternRecord> = FilterChain::new()
        .with(&UnattachedPatternFilter)
        .with(&ZeroOccurrenceFilter);

    let mut occurrences = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            debug!("Skipping cloud pattern #{index}: not an object");
            continue;
        }

        let record = match CloudPatternRecord::deserialize(item) {
            Ok(record) => record,
            Err(err) => {
                debug!("Skipping cloud pattern #{index}: {err}");
                continue;
            }
        };

        if !filters.should_keep(&record) {
            continue;
        }

        if let Some(row) = DetailRow::from_record(&record) {
            occurrences.push(PatternOccurrence {
                row,
                applications: record.application_names().map(str::to_string).collect(),
            });
        }
    }

    if occurrences.is_empty() {
        return Err(ExtractError::NoRows);
    }

    info!("Extracted {} cloud pattern findings", occurrences.len());
    Ok(occurrences)
}
