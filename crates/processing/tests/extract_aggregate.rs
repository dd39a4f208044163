use model::table::{ColumnKind, ReportTable};
use processing::{
    aggregate::{sort_by_occurrences, summarize_by_pattern, unique_applications},
    extract::{extract_cloud_patterns, extract_green_rows},
};
use serde_json::json;

#[test]
fn green_rows_drop_zero_occurrences_and_sort_descending() {
    let doc = json!({
        "metrics": [{
            "greenDetail": [
                {
                    "technology": "Java",
                    "greenIndexDetails": [
                        { "greenRequirement": { "display": "Avoid N+1 queries" }, "greenOccurrences": 5, "greenEffort": 240 },
                        { "greenRequirement": { "display": "Close streams" }, "greenOccurrences": 0, "greenEffort": 30 }
                    ]
                },
                {
                    "technology": "Python",
                    "greenIndexDetails": [
                        { "greenRequirement": { "display": "Avoid N+1 queries" }, "greenOccurrences": 10, "greenEffort": 960 }
                    ]
                }
            ]
        }]
    });

    let mut rows = extract_green_rows(&doc).unwrap();
    sort_by_occurrences(&mut rows);

    let counts: Vec<_> = rows.iter().map(|r| r.occurrences).collect();
    assert_eq!(counts, vec![10, 5]);
    assert!(rows.iter().all(|r| r.pattern != "Close streams"));

    let table = ReportTable::details("Detailed Green Metrics", &rows);
    let occurrences = table.column_index(ColumnKind::Count).unwrap();
    assert_eq!(table.column_sum(occurrences), 15.0);

    let summary = summarize_by_pattern(&rows);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].technologies_label(), "Java, Python");
    assert_eq!(summary[0].total_occurrences, 15);
}

#[test]
fn cloud_patterns_feed_all_three_tables() {
    let doc = json!([
        {
            "display": "Hardcoded IP address",
            "techno": { "display": "Java" },
            "roadBlocks": 3,
            "cloudEffort": 120,
            "applications": [{ "name": "billing" }]
        },
        {
            "display": "Local file storage",
            "techno": { "display": "C#" },
            "roadBlocks": 7,
            "cloudEffort": 600,
            "applications": [{ "name": "billing" }, { "name": "crm" }]
        },
        {
            "display": "Hardcoded IP address",
            "techno": { "display": "C#" },
            "roadBlocks": 4,
            "cloudEffort": 60,
            "applications": [{ "name": "hr" }]
        },
        {
            "display": "Registry access",
            "techno": { "display": "C#" },
            "roadBlocks": 0,
            "cloudEffort": 60,
            "applications": [{ "name": "legacy" }]
        }
    ]);

    let found = extract_cloud_patterns(&doc).unwrap();
    assert_eq!(found.len(), 3);

    let mut details: Vec<_> = found.iter().map(|o| o.row.clone()).collect();
    sort_by_occurrences(&mut details);
    let counts: Vec<_> = details.iter().map(|r| r.occurrences).collect();
    assert_eq!(counts, vec![7, 4, 3]);

    // Both patterns total 7; the first one seen stays first.
    let summary = summarize_by_pattern(found.iter().map(|o| &o.row));
    assert_eq!(summary[0].pattern, "Hardcoded IP address");
    assert_eq!(summary[0].technologies_label(), "C#, Java");
    assert_eq!(summary[0].total_occurrences, 7);
    assert_eq!(summary[1].pattern, "Local file storage");
    assert_eq!(summary[1].total_occurrences, 7);

    let unique = unique_applications(&found);
    assert_eq!(unique.rows[0].pattern, "Hardcoded IP address");
    assert_eq!(unique.rows[0].unique_application_count, 2);
    assert_eq!(unique.rows[1].unique_application_count, 2);
    // The zero-occurrence pattern's application is not counted.
    assert_eq!(unique.applications_overall, 3);
}
