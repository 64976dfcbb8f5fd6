//! Statistics reporting.

use console::style;

use crate::pipeline::RunReport;

/// Print the before/after summary block.
pub fn print_summary(report: &RunReport) {
    let stats = &report.stats;

    println!();
    println!("{}", style("===== SUMMARY =====").bold());
    println!("Base units:   {} → {}", stats.units_before, stats.units_after);
    println!("Base topics:  {} → {}", stats.topics_before, stats.topics_after);
    println!("Base skills:  {} → {}", stats.skills_before, stats.skills_after);
    println!(
        "Removed skills (dupes vs other subjects): {}",
        style(stats.removed_skills).yellow()
    );
    if !report.skipped_files.is_empty() {
        println!("Skipped files: {}", style(report.skipped_files.len()).red());
    }
    println!("Output written to: {}", report.output_path.display());
    println!("{}", style("===================").bold());
}
