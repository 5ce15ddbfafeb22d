use crate::report::ReportData;
use std::fmt::Write;

/// Turns a report into a display format (plain text, future HTML, etc.).
pub trait ReportRenderer {
    fn render(&self, report: &ReportData) -> String;
}

/// Plain-text rendering suitable for the terminal or a TXT export.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

const BANNER: &str = "============================================================";
const RULE: &str = "========================================";
const DASH: &str = "----------------------------------------";

impl ReportRenderer for TextReport {
    fn render(&self, report: &ReportData) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out, "WARD SHIFT ALLOCATION REPORT");
        let _ = writeln!(out, "Date: {}", report.generated_at.format("%Y-%m-%d %H:%M"));
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out);

        let _ = writeln!(out, "SUMMARY");
        let _ = writeln!(out, "Total Patients: {}", report.total_patients);
        let _ = writeln!(out, "Nurses on Duty: {}", report.nurse_count);
        let acuity = report.acuity_totals.describe();
        let acuity_line = if acuity.is_empty() { "none" } else { acuity.as_str() };
        let _ = writeln!(out, "Patient Acuity: {acuity_line}");

        for nurse in &report.nurses {
            let _ = writeln!(out);
            let _ = writeln!(out, "{RULE}");
            let _ = writeln!(out, "NURSE: {}", nurse.name);
            let _ = writeln!(out, "Skill Level: {}", nurse.skill);
            let _ = writeln!(out, "Patients Assigned: {}", nurse.patient_count);
            if !nurse.bed_ranges.is_empty() {
                let _ = writeln!(out, "Bed Assignment: {}", nurse.bed_ranges);
            }
            let breakdown = nurse.acuity.describe();
            if !breakdown.is_empty() {
                let _ = writeln!(out, "Acuity Breakdown: {breakdown}");
            }
            let _ = writeln!(out, "{}", nurse.justification);
        }

        if report.nurses.iter().any(|n| !n.tasks.is_empty()) {
            let _ = writeln!(out);
            let _ = writeln!(out, "TASKS DISTRIBUTION");
            let _ = writeln!(out, "{DASH}");
            for nurse in &report.nurses {
                if !nurse.tasks.is_empty() {
                    let _ = writeln!(out, "{}: {}", nurse.name, nurse.tasks.join(", "));
                }
            }
        }

        if !report.notes.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "SHIFT NOTES");
            let _ = writeln!(out, "{DASH}");
            let _ = writeln!(out, "{}", report.notes);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(
            out,
            "REMINDER: This is a planning tool. Always use clinical judgment."
        );
        out
    }
}
