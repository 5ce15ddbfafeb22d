use crate::model::{Allocation, Patient};
use thiserror::Error;

/// Options for one planning run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    /// Proceed even when the staffing ratio check fails. The failed check
    /// still travels with the outcome; nothing is hidden.
    pub allow_unsafe: bool,
}

/// Result of the staffing ratio check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioCheck {
    pub ok: bool,
    pub required_nurses: u32,
}

/// Declared acuity counts did not sum to the requested patient total; the
/// patient list was padded/truncated to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcuityMismatch {
    pub declared: u32,
    pub requested: u32,
}

/// Patient list built from acuity counts, plus the mismatch notice when the
/// counts had to be corrected.
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub patients: Vec<Patient>,
    pub mismatch: Option<AcuityMismatch>,
}

/// Everything one planning run produces.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub allocation: Allocation,
    pub ratio: RatioCheck,
    pub mismatch: Option<AcuityMismatch>,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid ratio: the nurse-to-patient ratio must be at least 1")]
    InvalidRatio,
    #[error("nurse name cannot be empty")]
    EmptyNurseName,
    #[error("duplicate nurse name: {0}")]
    DuplicateNurse(String),
    #[error("no nurses on duty: cannot allocate patients")]
    EmptyRoster,
    #[error("unsafe staffing: at least {required} nurses needed for a 1:{ratio} ratio, {available} on duty")]
    UnsafeStaffing {
        required: u32,
        ratio: u32,
        available: u32,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
