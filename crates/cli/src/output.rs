use report::EmittedReport;

pub fn success_lines(report: &EmittedReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Successfully saved data to {}",
        report.path.display()
    )];
    if let Some(column) = &report.cost_column {
        lines.push(format!(
            "Remember to enter cost rates in Column {column} to calculate Tech Debt"
        ));
    }
    lines
}

pub fn print_success(report: &EmittedReport) {
    for line in success_lines(report) {
        println!("{line}");
    }
}
