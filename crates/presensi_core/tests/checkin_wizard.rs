use presensi_core::db::open_db_in_memory;
use presensi_core::model::user::{NewUser, Role};
use presensi_core::repo::user_repo::UserRepository;
use presensi_core::{
    evaluate, AttendanceError, AttendanceKind, AttendanceService, CheckinWizard, Coordinate,
    GeoZone, ProximityResult, SqliteAttendanceRepository, WizardError, WizardStep,
};

fn school_zone() -> GeoZone {
    GeoZone {
        id: 1,
        name: "Sekolah".to_string(),
        center: Coordinate::new(-6.2000, 106.8166),
        radius_m: 100.0,
    }
}

fn outside_proximity() -> ProximityResult {
    ProximityResult {
        nearest_distance_m: Some(222.0),
        within_any_zone: false,
    }
}

fn inside_proximity() -> ProximityResult {
    ProximityResult {
        nearest_distance_m: Some(55.5),
        within_any_zone: true,
    }
}

#[test]
fn location_guard_blocks_progress_and_leaves_state_unchanged() {
    let mut wizard = CheckinWizard::new();
    wizard.choose(AttendanceKind::CheckIn).unwrap();
    wizard.update_fix(Coordinate::new(-6.2020, 106.8166));

    let err = wizard.confirm_location(&outside_proximity()).unwrap_err();
    assert!(matches!(err, WizardError::OutsideZone { .. }));
    assert_eq!(wizard.step(), WizardStep::VerifyLocation);

    // A fresh fix inside the zone unblocks the same wizard.
    wizard.update_fix(Coordinate::new(-6.2005, 106.8166));
    wizard.confirm_location(&inside_proximity()).unwrap();
    assert_eq!(wizard.step(), WizardStep::CaptureEvidence);
}

#[test]
fn location_step_requires_a_known_fix() {
    let mut wizard = CheckinWizard::new();
    wizard.choose(AttendanceKind::CheckIn).unwrap();

    let err = wizard.confirm_location(&inside_proximity()).unwrap_err();
    assert_eq!(err, WizardError::MissingCoordinate);
    assert_eq!(wizard.step(), WizardStep::VerifyLocation);
}

#[test]
fn evidence_must_be_non_empty() {
    let mut wizard = CheckinWizard::new();
    wizard.choose(AttendanceKind::CheckOut).unwrap();
    wizard.update_fix(Coordinate::new(-6.2005, 106.8166));
    wizard.confirm_location(&inside_proximity()).unwrap();

    assert_eq!(
        wizard.attach_evidence("").unwrap_err(),
        WizardError::MissingEvidence
    );
    assert_eq!(
        wizard.mark_submitted().unwrap_err(),
        WizardError::MissingEvidence
    );
    assert_eq!(wizard.step(), WizardStep::CaptureEvidence);
}

#[test]
fn operations_out_of_order_are_rejected() {
    let mut wizard = CheckinWizard::new();

    assert!(matches!(
        wizard.confirm_location(&inside_proximity()),
        Err(WizardError::InvalidStep { .. })
    ));
    assert!(matches!(
        wizard.attach_evidence("selfie"),
        Err(WizardError::InvalidStep { .. })
    ));
    assert_eq!(wizard.step(), WizardStep::ChooseType);

    wizard.choose(AttendanceKind::CheckIn).unwrap();
    assert!(matches!(
        wizard.choose(AttendanceKind::CheckOut),
        Err(WizardError::InvalidStep { .. })
    ));
}

#[test]
fn happy_path_reaches_submitted_with_a_full_payload() {
    let mut wizard = CheckinWizard::new();
    let fix = Coordinate::new(-6.2005, 106.8166);

    wizard.choose(AttendanceKind::CheckIn).unwrap();
    wizard.update_fix(fix);
    wizard
        .confirm_location(&evaluate(fix, &[school_zone()]))
        .unwrap();
    wizard.attach_evidence("data:image/jpeg;base64,AAAA").unwrap();

    let submission = wizard.submission(7).unwrap();
    assert_eq!(submission.user_id, 7);
    assert_eq!(submission.kind, AttendanceKind::CheckIn);
    assert_eq!(submission.coordinate, Some(fix));
    assert_eq!(
        submission.address.as_deref(),
        Some("Lat: -6.2005, Lng: 106.8166")
    );

    wizard.mark_submitted().unwrap();
    assert_eq!(wizard.step(), WizardStep::Submitted);

    wizard.reset();
    assert_eq!(wizard.step(), WizardStep::ChooseType);
    assert_eq!(wizard.kind(), None);
    // The location watcher outlives a wizard round.
    assert_eq!(wizard.last_fix(), Some(fix));
}

#[test]
fn failed_submission_keeps_the_wizard_in_capture_step() {
    let conn = open_db_in_memory().unwrap();
    let user_id = UserRepository::new(&conn)
        .create(&NewUser {
            username: "joko".to_string(),
            password: "rahasia".to_string(),
            name: "Joko".to_string(),
            role: Role::Pegawai,
            nip: None,
        })
        .unwrap();
    let service = AttendanceService::new(SqliteAttendanceRepository::new(&conn));

    let fix = Coordinate::new(-6.2005, 106.8166);
    let mut wizard = CheckinWizard::new();
    wizard.choose(AttendanceKind::CheckIn).unwrap();
    wizard.update_fix(fix);
    wizard
        .confirm_location(&evaluate(fix, &[school_zone()]))
        .unwrap();
    wizard.attach_evidence("data:image/jpeg;base64,AAAA").unwrap();

    // First round submits fine.
    service.submit(&wizard.submission(user_id).unwrap(), &[]).unwrap();
    wizard.mark_submitted().unwrap();

    // Second round conflicts server-side; the wizard holds its step so the
    // user can dismiss the message and retry (or reset) manually.
    wizard.reset();
    wizard.choose(AttendanceKind::CheckIn).unwrap();
    wizard
        .confirm_location(&evaluate(fix, &[school_zone()]))
        .unwrap();
    wizard.attach_evidence("data:image/jpeg;base64,BBBB").unwrap();

    let err = service
        .submit(&wizard.submission(user_id).unwrap(), &[])
        .unwrap_err();
    assert!(matches!(err, AttendanceError::AlreadyRecorded(_)));
    assert_eq!(wizard.step(), WizardStep::CaptureEvidence);
}
