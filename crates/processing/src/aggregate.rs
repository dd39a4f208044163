//! Grouping of detail rows by pattern label.
//!
//! Patterns are grouped on the exact label string. Every table comes out
//! sorted by its count column, largest first; the sort is stable so equal
//! counts keep the order in which their pattern was first seen.

use crate::extract::PatternOccurrence;
use model::records::row::{DetailRow, SummaryRow, UniqueApplicationRow};
use std::collections::{HashMap, HashSet};

/// Sorts detail rows by occurrences, largest first.
pub fn sort_by_occurrences(rows: &mut [DetailRow]) {
    rows.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
}

/// One summary row per pattern: its technologies and total occurrences.
pub fn summarize_by_pattern<'a, I>(rows: I) -> Vec<SummaryRow>
where
    I: IntoIterator<Item = &'a DetailRow>,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut summary: Vec<SummaryRow> = Vec::new();

    for row in rows {
        let slot = *slots.entry(row.pattern.as_str()).or_insert_with(|| {
            summary.push(SummaryRow::new(&row.pattern));
            summary.len() - 1
        });

        let entry = &mut summary[slot];
        entry.technologies.insert(row.technology.clone());
        entry.total_occurrences += row.occurrences;
    }

    summary.sort_by(|a, b| b.total_occurrences.cmp(&a.total_occurrences));
    summary
}

/// Distinct applications per pattern, plus the count across all patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueApplications {
    pub rows: Vec<UniqueApplicationRow>,
    pub applications_overall: usize,
}

pub fn unique_applications(occurrences: &[PatternOccurrence]) -> UniqueApplications {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, HashSet<&str>)> = Vec::new();
    let mut overall: HashSet<&str> = HashSet::new();

    for occurrence in occurrences {
        let pattern = occurrence.row.pattern.as_str();
        let slot = *slots.entry(pattern).or_insert_with(|| {
            groups.push((pattern, HashSet::new()));
            groups.len() - 1
        });

        for app in &occurrence.applications {
            groups[slot].1.insert(app.as_str());
            overall.insert(app.as_str());
        }
    }

    let mut rows: Vec<UniqueApplicationRow> = groups
        .into_iter()
        .map(|(pattern, apps)| UniqueApplicationRow {
            pattern: pattern.to_string(),
            unique_application_count: apps.len(),
        })
        .collect();
    rows.sort_by(|a, b| b.unique_application_count.cmp(&a.unique_application_count));

    UniqueApplications {
        rows,
        applications_overall: overall.len(),
    }
}
