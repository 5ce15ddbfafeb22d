mod acuity;
mod assignment;
mod ratio;
mod types;

pub use acuity::{distribute_acuity, reconcile_patients};
pub use assignment::allocate;
pub use ratio::validate_ratio;
pub use types::{AcuityMismatch, PlanError, PlanOptions, PlanOutcome, RatioCheck, Reconciled};

use crate::model::{Nurse, PlanRequest, Roster, SkillLevel};
use crate::report;

/// Planner: encapsulates a roster under construction and runs allocations
/// against it.
#[derive(Debug, Default)]
pub struct Planner {
    roster: Roster,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            roster: Roster::default(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Adds one nurse, rejecting empty and duplicate names.
    pub fn add_nurse(&mut self, name: &str, skill: SkillLevel) -> Result<(), PlanError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlanError::EmptyNurseName);
        }
        if self.roster.contains(name) {
            return Err(PlanError::DuplicateNurse(name.to_string()));
        }
        self.roster.nurses.push(Nurse::new(name, skill));
        Ok(())
    }

    /// Adds nurses one by one with the same validation as [`add_nurse`](Self::add_nurse).
    pub fn add_nurses<I: IntoIterator<Item = Nurse>>(&mut self, nurses: I) -> Result<(), PlanError> {
        for nurse in nurses {
            self.add_nurse(&nurse.name, nurse.skill)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.roster.nurses.clear();
    }

    /// Runs one allocation: ratio check, acuity reconciliation, round-robin
    /// distribution, task rotation.
    ///
    /// An unsafe ratio fails with [`PlanError::UnsafeStaffing`] unless the
    /// caller overrides via [`PlanOptions::allow_unsafe`]; the outcome then
    /// still carries the failed check. A corrected acuity mismatch is
    /// surfaced through [`PlanOutcome::mismatch`].
    pub fn plan(&self, request: &PlanRequest, opts: PlanOptions) -> Result<PlanOutcome, PlanError> {
        let check = ratio::validate_ratio(
            request.total_patients,
            request.ratio,
            self.roster.len(),
        )?;
        if !check.ok && !opts.allow_unsafe {
            return Err(PlanError::UnsafeStaffing {
                required: check.required_nurses,
                ratio: request.ratio,
                available: self.roster.len() as u32,
            });
        }

        let reconciled = acuity::reconcile_patients(&request.acuity, request.total_patients);
        let mut allocation = assignment::allocate(&reconciled.patients, &self.roster.nurses)?;
        allocation.set_tasks(report::rotate_tasks(&request.tasks, allocation.len()));

        Ok(PlanOutcome {
            allocation,
            ratio: check,
            mismatch: reconciled.mismatch,
        })
    }
}
