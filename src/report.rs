//! Pure report assembly: no I/O, no mutation of the allocation it reads.

use crate::model::{AcuityCounts, Allocation, SkillLevel};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Structured summary of one allocation run, ready for rendering or export.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub generated_at: DateTime<Utc>,
    pub total_patients: usize,
    pub nurse_count: usize,
    pub acuity_totals: AcuityCounts,
    pub nurses: Vec<NurseReport>,
    pub notes: String,
}

/// One nurse's row in the report.
#[derive(Debug, Clone, Serialize)]
pub struct NurseReport {
    pub name: String,
    pub skill: SkillLevel,
    pub patient_count: usize,
    /// Compressed bed ids, e.g. `"1-3, 5-6, 8"`. Empty with no patients.
    pub bed_ranges: String,
    pub acuity: AcuityCounts,
    pub tasks: Vec<String>,
    pub justification: String,
}

/// Builds the report view of an allocation. Reads only; the allocation is
/// left untouched.
pub fn summarize(allocation: &Allocation, notes: &str, generated_at: DateTime<Utc>) -> ReportData {
    let nurses = allocation
        .entries()
        .iter()
        .map(|entry| {
            let ids: Vec<u32> = entry.patients.iter().map(|p| p.id).collect();
            NurseReport {
                name: entry.nurse.name.clone(),
                skill: entry.nurse.skill,
                patient_count: entry.patients.len(),
                bed_ranges: bed_ranges(&ids),
                acuity: entry.acuity_counts(),
                tasks: entry.tasks.clone(),
                justification: entry.justification.clone(),
            }
        })
        .collect();

    ReportData {
        generated_at,
        total_patients: allocation.total_patients(),
        nurse_count: allocation.len(),
        acuity_totals: allocation.acuity_totals(),
        nurses,
        notes: notes.to_string(),
    }
}

/// Assigns task `i` to nurse `i mod nurse_count`: a second round-robin with
/// its own cursor, deliberately independent of the patient rotation.
pub fn rotate_tasks(tasks: &[String], nurse_count: usize) -> Vec<Vec<String>> {
    let mut rotation = vec![Vec::new(); nurse_count];
    if nurse_count == 0 {
        return rotation;
    }
    for (i, task) in tasks.iter().enumerate() {
        rotation[i % nurse_count].push(task.clone());
    }
    rotation
}

/// Compresses bed ids into inclusive ranges: consecutive ids collapse to
/// `"start-end"`, singletons stay bare, groups join with `", "`.
pub fn bed_ranges(ids: &[u32]) -> String {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();

    let mut out = String::new();
    let mut buf = itoa::Buffer::new();
    let Some((&first, rest)) = sorted.split_first() else {
        return out;
    };

    let (mut start, mut end) = (first, first);
    for &id in rest {
        if id == end + 1 {
            end = id;
        } else {
            push_range(&mut out, &mut buf, start, end);
            start = id;
            end = id;
        }
    }
    push_range(&mut out, &mut buf, start, end);
    out
}

fn push_range(out: &mut String, buf: &mut itoa::Buffer, start: u32, end: u32) {
    if !out.is_empty() {
        out.push_str(", ");
    }
    out.push_str(buf.format(start));
    if end != start {
        out.push('-');
        out.push_str(buf.format(end));
    }
}
