use super::types::PlanError;
use crate::model::{Acuity, Allocation, AllocationEntry, Nurse, Patient, SkillLevel};
use std::collections::HashSet;

/// Distributes patients over nurses in ordered round-robin.
///
/// Nurses are stable-sorted by skill rank (Senior first, ties keep input
/// order), which only decides who takes the earlier rotation slots: a
/// junior nurse still receives high-acuity patients when the rotation
/// wraps onto her. One cursor is shared across the High → Moderate → Low
/// passes, so moderate distribution resumes wherever high-acuity
/// exhaustion left off instead of restarting at the first nurse.
///
/// Every input patient lands in exactly one entry; entries come back in
/// sorted-nurse order with their justification text filled in.
pub fn allocate(patients: &[Patient], nurses: &[Nurse]) -> Result<Allocation, PlanError> {
    if nurses.is_empty() {
        return Err(PlanError::EmptyRoster);
    }
    let mut seen = HashSet::new();
    for nurse in nurses {
        if !seen.insert(nurse.name.as_str()) {
            return Err(PlanError::DuplicateNurse(nurse.name.clone()));
        }
    }

    let mut sorted: Vec<Nurse> = nurses.to_vec();
    sorted.sort_by_key(|n| n.skill.rank());

    let mut entries: Vec<AllocationEntry> =
        sorted.into_iter().map(AllocationEntry::empty).collect();

    let total = entries.len();
    let mut cursor = 0usize;
    for acuity in Acuity::ALL {
        for patient in patients.iter().filter(|p| p.acuity == acuity) {
            entries[cursor % total].patients.push(*patient);
            cursor += 1;
        }
    }

    for entry in &mut entries {
        entry.justification = justification(entry);
    }

    Ok(Allocation::new(entries))
}

/// Count + composition summary, plus a skill-appropriateness remark for a
/// senior nurse holding high-acuity patients or a junior nurse holding none.
fn justification(entry: &AllocationEntry) -> String {
    let counts = entry.acuity_counts();
    let mut text = format!("Assigned {} patients", entry.patients.len());
    let composition = counts.describe();
    if !composition.is_empty() {
        text.push_str(&format!(" ({composition})"));
    }
    match entry.nurse.skill {
        SkillLevel::Senior if counts.high > 0 => {
            text.push_str(". Senior nurse assigned high-acuity patients.");
        }
        SkillLevel::Junior if counts.high == 0 => {
            text.push_str(". Junior nurse assigned appropriate lower-acuity patients.");
        }
        _ => {}
    }
    text
}
