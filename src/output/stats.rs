//! End-of-run statistics

use crate::crawler::CrawlReport;

/// Formats the single-line pass/fail tally of a run
pub fn format_summary_line(report: &CrawlReport) -> String {
    format!(
        "Total : {}\tPass : {}\tFail : {}",
        report.stats.total(), report.stats.succeeded, report.stats.failed
    )
}

/// Prints the run summary to stdout
///
/// # Arguments
///
/// * `report` - The finished crawl
pub fn print_summary(report: &CrawlReport) {
    let nodes: usize = report
        .results
        .iter()
        .map(|entry| 1 + entry.body.descendant_count())
        .sum();

    println!("\n===================================");
    println!(
        "Entries: {} top-level, {} pages in tree",
        report.results.len(), nodes
    );
    println!("Success Rate: {:.1}%", report.stats.success_rate());
    println!("{}", format_summary_line(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::CrawlStats;

    #[test]
    fn test_summary_line() {
        let report = CrawlReport {
            stats: CrawlStats::new(12, 3),
            ..Default::default()
        };
        assert_eq!(
            format_summary_line(&report),
            "Total : 15\tPass : 12\tFail : 3"
        );
    }

    #[test]
    fn test_summary_line_empty_run() {
        assert_eq!(
            format_summary_line(&CrawlReport::default()),
            "Total : 0\tPass : 0\tFail : 0"
        );
    }
}
