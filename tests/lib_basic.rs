#![forbid(unsafe_code)]
use std::collections::HashSet;
use wardplan::{
    allocate, distribute_acuity, reconcile_patients, validate_ratio,
    model::{Acuity, AcuityCounts, Nurse, PlanRequest, SkillLevel},
    planner::{PlanError, PlanOptions, Planner},
};

fn nurse(name: &str, skill: SkillLevel) -> Nurse {
    Nurse::new(name, skill)
}

fn ward_roster() -> Vec<Nurse> {
    vec![
        nurse("Dana", SkillLevel::Senior),
        nurse("Omar", SkillLevel::Intermediate),
        nurse("Lea", SkillLevel::Junior),
    ]
}

#[test]
fn end_to_end_rotation_with_shared_cursor() {
    let reconciled = reconcile_patients(&AcuityCounts::new(2, 2, 2), 6);
    assert!(reconciled.mismatch.is_none());

    let allocation = allocate(&reconciled.patients, &ward_roster()).unwrap();

    // High block lands on Dana, Omar; the cursor carries into the moderate
    // block at Lea instead of restarting.
    let ids = |name: &str| -> Vec<u32> {
        allocation
            .get(name)
            .unwrap()
            .patients
            .iter()
            .map(|p| p.id)
            .collect()
    };
    assert_eq!(ids("Dana"), vec![1, 4]);
    assert_eq!(ids("Omar"), vec![2, 5]);
    assert_eq!(ids("Lea"), vec![3, 6]);

    let dana = allocation.get("Dana").unwrap();
    assert_eq!(
        dana.justification,
        "Assigned 2 patients (1 high, 1 moderate). Senior nurse assigned high-acuity patients."
    );
    let omar = allocation.get("Omar").unwrap();
    assert_eq!(omar.justification, "Assigned 2 patients (1 high, 1 low)");
    let lea = allocation.get("Lea").unwrap();
    assert_eq!(
        lea.justification,
        "Assigned 2 patients (1 moderate, 1 low). Junior nurse assigned appropriate lower-acuity patients."
    );
}

#[test]
fn allocation_partitions_patients_exactly() {
    let counts = distribute_acuity(23);
    let reconciled = reconcile_patients(&counts, 23);
    let nurses = vec![
        nurse("a", SkillLevel::Junior),
        nurse("b", SkillLevel::Senior),
        nurse("c", SkillLevel::Intermediate),
        nurse("d", SkillLevel::Senior),
        nurse("e", SkillLevel::Junior),
    ];

    let allocation = allocate(&reconciled.patients, &nurses).unwrap();
    assert_eq!(allocation.total_patients(), 23);

    let mut seen = HashSet::new();
    for entry in allocation.entries() {
        for patient in &entry.patients {
            assert!(seen.insert(patient.id), "patient {} duplicated", patient.id);
        }
    }
    assert_eq!(seen, (1..=23).collect::<HashSet<u32>>());
}

#[test]
fn round_robin_load_stays_within_one_patient() {
    for (nurse_count, patient_count) in [(4usize, 28u32), (3, 7), (5, 12), (6, 5)] {
        let nurses: Vec<Nurse> = (0..nurse_count)
            .map(|i| nurse(&format!("n{i}"), SkillLevel::Intermediate))
            .collect();
        let reconciled = reconcile_patients(&distribute_acuity(patient_count), patient_count);
        let allocation = allocate(&reconciled.patients, &nurses).unwrap();

        let floor = patient_count as usize / nurse_count;
        let ceil = (patient_count as usize).div_ceil(nurse_count);
        for entry in allocation.entries() {
            let len = entry.patients.len();
            assert!(
                len == floor || len == ceil,
                "{} got {} patients, expected {} or {}",
                entry.nurse.name,
                len,
                floor,
                ceil
            );
        }
    }
}

#[test]
fn skill_sort_is_stable_within_rank() {
    let nurses = vec![
        nurse("j1", SkillLevel::Junior),
        nurse("s1", SkillLevel::Senior),
        nurse("i1", SkillLevel::Intermediate),
        nurse("s2", SkillLevel::Senior),
    ];
    let allocation = allocate(&[], &nurses).unwrap();
    let order: Vec<&str> = allocation
        .entries()
        .iter()
        .map(|e| e.nurse.name.as_str())
        .collect();
    assert_eq!(order, vec!["s1", "s2", "i1", "j1"]);
}

#[test]
fn ratio_validator_reports_required_nurses() {
    let check = validate_ratio(28, 6, 4).unwrap();
    assert_eq!(check.required_nurses, 5);
    assert!(!check.ok);

    let check = validate_ratio(28, 6, 5).unwrap();
    assert!(check.ok);

    assert!(matches!(
        validate_ratio(28, 0, 5),
        Err(PlanError::InvalidRatio)
    ));
}

#[test]
fn distributor_buckets_sum_to_total() {
    for total in 0..=40 {
        let counts = distribute_acuity(total);
        assert_eq!(counts.total(), total);
        assert_eq!(counts.high, total / 5);
        assert_eq!(counts.moderate, total / 2);
    }
}

#[test]
fn reconcile_pads_with_moderate_patients() {
    let reconciled = reconcile_patients(&AcuityCounts::new(1, 1, 1), 6);
    assert_eq!(
        reconciled.mismatch,
        Some(wardplan::AcuityMismatch {
            declared: 3,
            requested: 6
        })
    );
    let patients = &reconciled.patients;
    assert_eq!(patients.len(), 6);
    let ids: Vec<u32> = patients.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    for patient in &patients[3..] {
        assert_eq!(patient.acuity, Acuity::Moderate);
    }
}

#[test]
fn reconcile_truncates_excess_from_the_end() {
    let reconciled = reconcile_patients(&AcuityCounts::new(2, 2, 2), 4);
    assert_eq!(
        reconciled.mismatch,
        Some(wardplan::AcuityMismatch {
            declared: 6,
            requested: 4
        })
    );
    let acuities: Vec<Acuity> = reconciled.patients.iter().map(|p| p.acuity).collect();
    assert_eq!(
        acuities,
        vec![Acuity::High, Acuity::High, Acuity::Moderate, Acuity::Moderate]
    );
}

#[test]
fn duplicate_and_empty_rosters_are_rejected() {
    let patients = reconcile_patients(&AcuityCounts::new(0, 2, 0), 2).patients;

    let duplicated = vec![
        nurse("Dana", SkillLevel::Senior),
        nurse("Dana", SkillLevel::Junior),
    ];
    assert!(matches!(
        allocate(&patients, &duplicated),
        Err(PlanError::DuplicateNurse(name)) if name == "Dana"
    ));

    assert!(matches!(
        allocate(&patients, &[]),
        Err(PlanError::EmptyRoster)
    ));
}

#[test]
fn planner_validates_nurse_entry() {
    let mut planner = Planner::new();
    assert!(matches!(
        planner.add_nurse("   ", SkillLevel::Senior),
        Err(PlanError::EmptyNurseName)
    ));
    planner.add_nurse("Dana", SkillLevel::Senior).unwrap();
    assert!(matches!(
        planner.add_nurse("Dana", SkillLevel::Junior),
        Err(PlanError::DuplicateNurse(_))
    ));
    assert_eq!(planner.roster().len(), 1);
}

#[test]
fn unsafe_staffing_needs_an_explicit_override() {
    let mut planner = Planner::new();
    planner.add_nurse("Dana", SkillLevel::Senior).unwrap();

    let request = PlanRequest {
        total_patients: 28,
        ratio: 6,
        acuity: distribute_acuity(28),
        tasks: Vec::new(),
        notes: String::new(),
    };

    assert!(matches!(
        planner.plan(&request, PlanOptions::default()),
        Err(PlanError::UnsafeStaffing {
            required: 5,
            ratio: 6,
            available: 1
        })
    ));

    let outcome = planner
        .plan(&request, PlanOptions { allow_unsafe: true })
        .unwrap();
    assert!(!outcome.ratio.ok);
    assert_eq!(outcome.ratio.required_nurses, 5);
    assert_eq!(outcome.allocation.total_patients(), 28);
}

#[test]
fn plan_surfaces_acuity_mismatch() {
    let mut planner = Planner::new();
    planner.add_nurse("Dana", SkillLevel::Senior).unwrap();
    planner.add_nurse("Omar", SkillLevel::Junior).unwrap();

    let request = PlanRequest {
        total_patients: 6,
        ratio: 6,
        acuity: AcuityCounts::new(1, 1, 1),
        tasks: Vec::new(),
        notes: String::new(),
    };
    let outcome = planner.plan(&request, PlanOptions::default()).unwrap();
    assert!(outcome.mismatch.is_some());
    assert_eq!(outcome.allocation.total_patients(), 6);
}
