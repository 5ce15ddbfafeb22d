#![forbid(unsafe_code)]
//! Wardplan — ward shift planning library (no database).
//!
//! - Nurse roster as plain `name,skill` text lines.
//! - Seniority-aware round-robin patient allocation with justification text.
//! - Staffing-ratio validation with an explicit override.
//! - Report assembly and rendering kept outside the allocation core.

pub mod io;
pub mod model;
pub mod planner;
pub mod render;
pub mod report;
pub mod storage;

pub use model::{
    Acuity, AcuityCounts, Allocation, AllocationEntry, Nurse, Patient, PlanRequest, Roster,
    SkillLevel, DEFAULT_TASKS,
};
pub use planner::{
    allocate, distribute_acuity, reconcile_patients, validate_ratio, AcuityMismatch, PlanError,
    PlanOptions, PlanOutcome, Planner, RatioCheck, Reconciled,
};
pub use render::{ReportRenderer, TextReport};
pub use report::{bed_ranges, rotate_tasks, summarize, NurseReport, ReportData};
pub use storage::{RosterStorage, TextRosterStorage};
