use super::types::{AcuityMismatch, Reconciled};
use crate::model::{Acuity, AcuityCounts, Patient};

/// Splits a patient total into acuity buckets using the fixed 20/50/30
/// proportions. Low absorbs the rounding remainder so the three always sum
/// to `total`.
pub fn distribute_acuity(total: u32) -> AcuityCounts {
    let high = total / 5;
    let moderate = total / 2;
    AcuityCounts {
        high,
        moderate,
        low: total - high - moderate,
    }
}

/// Builds the concrete patient list from acuity counts, ids 1-based in
/// High → Moderate → Low block order.
///
/// The requested total stays authoritative over manually edited counts:
/// a short list is padded with Moderate patients (ids continuing the
/// sequence), a long one is truncated from the end, and the correction is
/// surfaced through [`Reconciled::mismatch`].
pub fn reconcile_patients(counts: &AcuityCounts, total: u32) -> Reconciled {
    let mut patients = Vec::with_capacity(total as usize);
    for acuity in Acuity::ALL {
        for _ in 0..counts.get(acuity) {
            patients.push(Patient {
                id: patients.len() as u32 + 1,
                acuity,
            });
        }
    }

    let declared = counts.total();
    let mismatch = (declared != total).then_some(AcuityMismatch {
        declared,
        requested: total,
    });

    while (patients.len() as u32) < total {
        patients.push(Patient {
            id: patients.len() as u32 + 1,
            acuity: Acuity::Moderate,
        });
    }
    patients.truncate(total as usize);

    Reconciled { patients, mismatch }
}
