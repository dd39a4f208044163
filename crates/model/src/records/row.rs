use crate::{core::effort::person_days, records::raw::RawRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One pattern/technology line of a detail sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailRow {
    pub pattern: String,
    pub technology: String,
    pub occurrences: u64,
    pub effort_person_days: f64,
    /// Entered by hand in the spreadsheet; never known at generation time.
    pub cost_per_day: Option<f64>,
    /// Computed by the spreadsheet from effort and cost.
    pub tech_debt: Option<f64>,
}

impl DetailRow {
    /// Builds a row from a raw record. Records without a positive occurrence
    /// count produce no row.
    pub fn from_record<R: RawRecord + ?Sized>(record: &R) -> Option<Self> {
        let occurrences = u64::try_from(record.occurrences()).ok().filter(|n| *n > 0)?;

        Some(DetailRow {
            pattern: record.pattern().to_string(),
            technology: record.technology().to_string(),
            occurrences,
            effort_person_days: person_days(record.effort_minutes()),
            cost_per_day: None,
            tech_debt: None,
        })
    }
}

/// Occurrences of one pattern across all technologies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryRow {
    pub pattern: String,
    pub technologies: BTreeSet<String>,
    pub total_occurrences: u64,
}

impl SummaryRow {
    pub fn new(pattern: &str) -> Self {
        SummaryRow {
            pattern: pattern.to_string(),
            technologies: BTreeSet::new(),
            total_occurrences: 0,
        }
    }

    /// Sorted, de-duplicated technology names joined with `", "`.
    pub fn technologies_label(&self) -> String {
        self.technologies
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Number of distinct applications in which a pattern was found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UniqueApplicationRow {
    pub pattern: String,
    pub unique_application_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        occurrences: i64,
        effort: f64,
    }

    impl RawRecord for Fixture {
        fn pattern(&self) -> &str {
            "P1"
        }

        fn technology(&self) -> &str {
            "Java"
        }

        fn occurrences(&self) -> i64 {
            self.occurrences
        }

        fn effort_minutes(&self) -> f64 {
            self.effort
        }
    }

    #[test]
    fn test_from_record_converts_effort() {
        let row = DetailRow::from_record(&Fixture {
            occurrences: 3,
            effort: 960.0,
        })
        .unwrap();

        assert_eq!(row.pattern, "P1");
        assert_eq!(row.technology, "Java");
        assert_eq!(row.occurrences, 3);
        assert_eq!(row.effort_person_days, 2.0);
        assert_eq!(row.cost_per_day, None);
        assert_eq!(row.tech_debt, None);
    }

    #[test]
    fn test_from_record_rejects_non_positive_occurrences() {
        for occurrences in [0, -1] {
            let record = Fixture {
                occurrences,
                effort: 480.0,
            };
            assert!(DetailRow::from_record(&record).is_none());
        }
    }

    #[test]
    fn test_technologies_label_is_sorted_and_unique() {
        let mut row = SummaryRow::new("P1");
        for tech in ["Python", "Java", "Java"] {
            row.technologies.insert(tech.to_string());
        }
        assert_eq!(row.technologies_label(), "Java, Python");
    }
}
