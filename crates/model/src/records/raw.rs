//! Vendor payload shapes, decoded tolerantly.

use crate::records::{NOT_AVAILABLE, lenient};
use serde::Deserialize;

/// Common view over one pattern occurrence record, whatever payload it came
/// from.
pub trait RawRecord {
    fn pattern(&self) -> &str;
    fn technology(&self) -> &str;
    fn occurrences(&self) -> i64;
    fn effort_minutes(&self) -> f64;
}

/// `{ "display": ... }` wrapper used for labels throughout the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisplayLabel {
    #[serde(deserialize_with = "lenient::text")]
    pub display: Option<String>,
}

impl DisplayLabel {
    pub fn label(&self) -> &str {
        self.display.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

// Application-scoped green metrics:
// metrics[0].greenDetail[*].greenIndexDetails[*]

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GreenMetricsDocument {
    #[serde(deserialize_with = "lenient::list")]
    pub metrics: Vec<ApplicationMetric>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationMetric {
    #[serde(rename = "greenDetail", deserialize_with = "lenient::list")]
    pub green_detail: Vec<GreenTechnologyDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GreenTechnologyDetail {
    #[serde(deserialize_with = "lenient::text")]
    pub technology: Option<String>,
    #[serde(rename = "greenIndexDetails", deserialize_with = "lenient::list")]
    pub index_details: Vec<GreenIndexDetail>,
}

impl GreenTechnologyDetail {
    pub fn technology(&self) -> &str {
        self.technology.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Leaf records paired with this entry's technology.
    pub fn records(&self) -> impl Iterator<Item = GreenRecord<'_>> {
        let technology = self.technology();
        self.index_details
            .iter()
            .map(move |detail| GreenRecord { technology, detail })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GreenIndexDetail {
    #[serde(rename = "greenRequirement", deserialize_with = "lenient::nested")]
    pub requirement: DisplayLabel,
    #[serde(rename = "greenOccurrences", deserialize_with = "lenient::count")]
    pub occurrences: i64,
    #[serde(rename = "greenEffort", deserialize_with = "lenient::number")]
    pub effort: f64,
}

/// One green requirement leaf together with the technology it was reported
/// under.
#[derive(Debug, Clone, Copy)]
pub struct GreenRecord<'a> {
    pub technology: &'a str,
    pub detail: &'a GreenIndexDetail,
}

impl RawRecord for GreenRecord<'_> {
    fn pattern(&self) -> &str {
        self.detail.requirement.label()
    }

    fn technology(&self) -> &str {
        self.technology
    }

    fn occurrences(&self) -> i64 {
        self.detail.occurrences
    }

    fn effort_minutes(&self) -> f64 {
        self.detail.effort
    }
}

// Domain-scoped cloud requirements: a top-level array of patterns.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CloudPatternRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub display: Option<String>,
    #[serde(deserialize_with = "lenient::nested")]
    pub techno: DisplayLabel,
    #[serde(rename = "roadBlocks", deserialize_with = "lenient::count")]
    pub road_blocks: i64,
    #[serde(rename = "cloudEffort", deserialize_with = "lenient::number")]
    pub cloud_effort: f64,
    #[serde(deserialize_with = "lenient::list")]
    pub applications: Vec<ApplicationRef>,
}

impl CloudPatternRecord {
    pub fn application_names(&self) -> impl Iterator<Item = &str> {
        self.applications.iter().map(ApplicationRef::name)
    }
}

impl RawRecord for CloudPatternRecord {
    fn pattern(&self) -> &str {
        self.display.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    fn technology(&self) -> &str {
        self.techno.label()
    }

    fn occurrences(&self) -> i64 {
        self.road_blocks
    }

    fn effort_minutes(&self) -> f64 {
        self.cloud_effort
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationRef {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
}

impl ApplicationRef {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}
