use super::types::{PlanError, RatioCheck};

/// Checks the roster size against the minimum required by a 1:`ratio`
/// nurse-to-patient ratio.
///
/// The check reports; it never aborts a run by itself. Whether an unsafe
/// result blocks planning is decided by the caller (see
/// [`PlanOptions::allow_unsafe`](super::PlanOptions)).
pub fn validate_ratio(
    total_patients: u32,
    ratio: u32,
    nurse_count: usize,
) -> Result<RatioCheck, PlanError> {
    if ratio == 0 {
        return Err(PlanError::InvalidRatio);
    }
    let required_nurses = total_patients.div_ceil(ratio);
    Ok(RatioCheck {
        ok: nurse_count as u32 >= required_nurses,
        required_nurses,
    })
}
