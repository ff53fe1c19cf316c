//! Output formatting utilities

use console::style;

use tagship_publish::{DispatchOutcome, DispatchReport, DispatchResult};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

/// Print one line per dispatched artifact
pub fn dispatch_results(results: &[DispatchResult]) {
    for result in results {
        let name = &result.artifact.file_name;
        match &result.outcome {
            DispatchOutcome::Published => success(&format!("{} published", style(name).cyan())),
            DispatchOutcome::Failed(_) => error(&format!("{} {}", style(name).cyan(), result.outcome)),
            DispatchOutcome::SkippedNotEligible => {
                info(&format!("{} {}", style(name).cyan(), result.outcome))
            }
            DispatchOutcome::SkippedMissingArtifact(_) => {
                warning(&format!("{} {}", style(name).cyan(), result.outcome))
            }
        }
    }
}

/// One-line summary of a dispatch report
pub fn report_summary(report: &DispatchReport) -> String {
    format!(
        "{} published, {} skipped, {} failed",
        report.published,
        report.skipped(),
        report.failed
    )
}

/// Print the dispatch summary, listing failures
pub fn dispatch_report(report: &DispatchReport) {
    println!();
    if report.total() == 0 {
        warning("No artifacts found to publish");
        return;
    }

    let summary = report_summary(report);
    if report.has_failures() {
        warning(&summary);
        for (artifact, reason) in &report.failures {
            println!("{}", key_value(artifact, reason));
        }
    } else {
        success(&summary);
    }
}
