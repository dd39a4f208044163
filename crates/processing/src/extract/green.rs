use crate::{
    error::ExtractError,
    filter::{Filter, ZeroOccurrenceFilter},
};
use model::records::{raw::GreenMetricsDocument, row::DetailRow};
use serde::Deserialize;
use serde_json::Value as Json;
use tracing::{debug, info};

pub const EMPTY_RESPONSE: &str = "Empty response from the API.";
pub const NO_METRICS: &str = "No metrics data found in the response.";
pub const NO_GREEN_DETAILS: &str = "No green details found in metrics.";

/// Detail rows of the first metrics entry of an application document, in
/// payload order.
pub fn extract_green_rows(document: &Json) -> Result<Vec<DetailRow>, ExtractError> {
    if is_empty(document) {
        return Err(ExtractError::no_data(EMPTY_RESPONSE));
    }

    if !document.is_object() {
        return Err(ExtractError::no_data(NO_METRICS));
    }

    let doc = GreenMetricsDocument::deserialize(document).unwrap_or_default();
    let metric = doc
        .metrics
        .first()
        .ok_or_else(|| ExtractError::no_data(NO_METRICS))?;

    if metric.green_detail.is_empty() {
        return Err(ExtractError::no_data(NO_GREEN_DETAILS));
    }

    let filter = ZeroOccurrenceFilter;
    let mut rows = Vec::new();
    for technology in &metric.green_detail {
        if technology.index_details.is_empty() {
            debug!(
                "Skipping technology '{}' without green index details",
                technology.technology()
            );
            continue;
        }

        rows.extend(
            technology
                .records()
                .filter(|record| filter.should_keep(record))
                .filter_map(|record| DetailRow::from_record(&record)),
        );
    }

    if rows.is_empty() {
        return Err(ExtractError::NoRows);
    }

    info!("Extracted {} green findings", rows.len());
    Ok(rows)
}

fn is_empty(document: &Json) -> bool {
    match document {
        Json::Null => true,
        Json::Object(map) => map.is_empty(),
        Json::Array(items) => items.is_empty(),
        Json::String(s) => s.is_empty(),
        _ => false,
    }
}
