use serde::{Deserialize, Serialize};
use std::fmt;

/// Tasks offered by default when the caller does not select any.
pub const DEFAULT_TASKS: [&str; 5] = [
    "Wound dressings",
    "Bed baths",
    "IV meds",
    "Post-ops",
    "Isolation cases",
];

/// Nurse skill level, ordered Senior < Intermediate < Junior for rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Senior,
    Intermediate,
    Junior,
}

impl SkillLevel {
    /// Rotation rank: lower ranks take the earlier round-robin slots.
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Senior => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Junior => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Senior => "Senior",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Junior => "Junior",
        }
    }

    /// Parses a roster-file skill label; unrecognized values fall back to
    /// Intermediate.
    pub fn parse_lossy(raw: &str) -> Self {
        match raw.trim() {
            "Senior" => SkillLevel::Senior,
            "Junior" => SkillLevel::Junior,
            _ => SkillLevel::Intermediate,
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient acuity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Acuity {
    High,
    Moderate,
    Low,
}

impl Acuity {
    /// All classes, in distribution order.
    pub const ALL: [Acuity; 3] = [Acuity::High, Acuity::Moderate, Acuity::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Acuity::High => "High",
            Acuity::Moderate => "Moderate",
            Acuity::Low => "Low",
        }
    }

    /// Lowercase label used in justification and summary text.
    pub fn label(self) -> &'static str {
        match self {
            Acuity::High => "high",
            Acuity::Moderate => "moderate",
            Acuity::Low => "low",
        }
    }
}

impl fmt::Display for Acuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nurse on duty. Names are unique within a roster (enforced by the planner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nurse {
    pub name: String,
    pub skill: SkillLevel,
}

impl Nurse {
    pub fn new<N: Into<String>>(name: N, skill: SkillLevel) -> Self {
        Self {
            name: name.into(),
            skill,
        }
    }
}

/// Synthetic patient: `id` is a 1-based bed/slot index, not an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub acuity: Acuity,
}

/// Patient counts per acuity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcuityCounts {
    pub high: u32,
    pub moderate: u32,
    pub low: u32,
}

impl AcuityCounts {
    pub fn new(high: u32, moderate: u32, low: u32) -> Self {
        Self {
            high,
            moderate,
            low,
        }
    }

    pub fn total(&self) -> u32 {
        self.high + self.moderate + self.low
    }

    pub fn get(&self, acuity: Acuity) -> u32 {
        match acuity {
            Acuity::High => self.high,
            Acuity::Moderate => self.moderate,
            Acuity::Low => self.low,
        }
    }

    pub(crate) fn bump(&mut self, acuity: Acuity) {
        match acuity {
            Acuity::High => self.high += 1,
            Acuity::Moderate => self.moderate += 1,
            Acuity::Low => self.low += 1,
        }
    }

    /// Compact text form over the classes present, e.g. `"2 high, 1 moderate"`.
    /// Empty when all counts are zero.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        for acuity in Acuity::ALL {
            let count = self.get(acuity);
            if count > 0 {
                parts.push(format!("{} {}", count, acuity.label()));
            }
        }
        parts.join(", ")
    }
}

/// Roster of nurses for one shift, in entry order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    pub nurses: Vec<Nurse>,
}

impl Roster {
    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Nurse> {
        self.nurses.iter().find(|n| n.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.nurses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nurses.is_empty()
    }
}

/// One planning run's input, supplied fresh per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub total_patients: u32,
    pub ratio: u32,
    pub acuity: AcuityCounts,
    pub tasks: Vec<String>,
    pub notes: String,
}

/// Per-nurse slice of an allocation run.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationEntry {
    pub nurse: Nurse,
    pub patients: Vec<Patient>,
    pub tasks: Vec<String>,
    pub justification: String,
}

impl AllocationEntry {
    pub(crate) fn empty(nurse: Nurse) -> Self {
        Self {
            nurse,
            patients: Vec::new(),
            tasks: Vec::new(),
            justification: String::new(),
        }
    }

    /// Breakdown of this nurse's patients per acuity class.
    pub fn acuity_counts(&self) -> AcuityCounts {
        let mut counts = AcuityCounts::default();
        for patient in &self.patients {
            counts.bump(patient.acuity);
        }
        counts
    }
}

/// Result of one allocation run.
///
/// Entries are held in sorted-nurse order (Senior first, input order within
/// a skill level); that order is the iteration contract, not an accident of
/// an underlying map. Built once per run, read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Allocation {
    entries: Vec<AllocationEntry>,
}

impl Allocation {
    pub(crate) fn new(entries: Vec<AllocationEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    pub fn get<'a>(&'a self, name: &str) -> Option<&'a AllocationEntry> {
        self.entries.iter().find(|e| e.nurse.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_patients(&self) -> usize {
        self.entries.iter().map(|e| e.patients.len()).sum()
    }

    /// Per-acuity totals over every assigned patient.
    pub fn acuity_totals(&self) -> AcuityCounts {
        let mut totals = AcuityCounts::default();
        for entry in &self.entries {
            for patient in &entry.patients {
                totals.bump(patient.acuity);
            }
        }
        totals
    }

    pub(crate) fn set_tasks(&mut self, rotation: Vec<Vec<String>>) {
        for (entry, tasks) in self.entries.iter_mut().zip(rotation) {
            entry.tasks = tasks;
        }
    }
}
