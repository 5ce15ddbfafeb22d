use crate::model::{Nurse, SkillLevel};
use crate::report::ReportData;
use anyhow::Context;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Import nurses from a line-oriented file: each line is `name,skill` or a
/// bare `name` (skill defaults to Intermediate, as does any unrecognized
/// skill value). Blank lines and empty names are skipped.
pub fn import_nurses<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Nurse>> {
    let data = fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.as_ref().display()))?;
    let mut out = Vec::new();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (name, skill) = match line.split_once(',') {
            Some((name, skill)) => (name.trim(), SkillLevel::parse_lossy(skill)),
            None => (line, SkillLevel::Intermediate),
        };
        if name.is_empty() {
            continue;
        }
        out.push(Nurse::new(name, skill));
    }
    Ok(out)
}

/// Export nurses as the inverse serialization: one `name,skill` line each.
pub fn export_nurses<P: AsRef<Path>>(path: P, nurses: &[Nurse]) -> anyhow::Result<()> {
    fs::write(&path, roster_lines(nurses))
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}

pub(crate) fn roster_lines(nurses: &[Nurse]) -> String {
    let mut out = String::new();
    for nurse in nurses {
        out.push_str(&nurse.name);
        out.push(',');
        out.push_str(nurse.skill.as_str());
        out.push('\n');
    }
    out
}

/// Export the report as pretty-printed JSON.
pub fn export_report_json<P: AsRef<Path>>(path: P, report: &ReportData) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}

/// Export the report as CSV, one row per nurse:
/// `nurse,skill,patients,beds,high,moderate,low,tasks,justification`.
pub fn export_report_csv<P: AsRef<Path>>(path: P, report: &ReportData) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "nurse",
        "skill",
        "patients",
        "beds",
        "high",
        "moderate",
        "low",
        "tasks",
        "justification",
    ])?;
    for nurse in &report.nurses {
        let patients = nurse.patient_count.to_string();
        let high = nurse.acuity.high.to_string();
        let moderate = nurse.acuity.moderate.to_string();
        let low = nurse.acuity.low.to_string();
        let tasks = nurse.tasks.join("; ");
        w.write_record([
            nurse.name.as_str(),
            nurse.skill.as_str(),
            patients.as_str(),
            nurse.bed_ranges.as_str(),
            high.as_str(),
            moderate.as_str(),
            low.as_str(),
            tasks.as_str(),
            nurse.justification.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
