use presensi_core::db::open_db_in_memory;
use presensi_core::model::user::{NewUser, Role, UserUpdate};
use presensi_core::repo::geo_repo::NewZone;
use presensi_core::repo::user_repo::UserRepository;
use presensi_core::{
    AdminService, AttendanceKind, AttendanceService, Coordinate, RepoError,
    SqliteAttendanceRepository, SubmitAttendance,
};

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "rahasia".to_string(),
        name: format!("User {username}"),
        role: Role::Pegawai,
        nip: Some("19870101".to_string()),
    }
}

#[test]
fn seeded_accounts_authenticate_with_default_credentials() {
    let conn = open_db_in_memory().unwrap();
    let users = UserRepository::new(&conn);

    let admin = users.authenticate("admin", "admin123").unwrap().unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(admin.name, "Administrator");

    let guru = users.authenticate("guru", "guru123").unwrap().unwrap();
    assert_eq!(guru.role, Role::Guru);

    assert!(users.authenticate("admin", "wrong").unwrap().is_none());
    assert!(users.authenticate("nobody", "admin123").unwrap().is_none());
}

#[test]
fn user_create_rejects_duplicate_usernames() {
    let conn = open_db_in_memory().unwrap();
    let users = UserRepository::new(&conn);

    users.create(&new_user("budi")).unwrap();
    let err = users.create(&new_user("budi")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::DuplicateName { entity: "user", .. }
    ));
}

#[test]
fn user_update_without_password_keeps_the_stored_password() {
    let conn = open_db_in_memory().unwrap();
    let users = UserRepository::new(&conn);
    let id = users.create(&new_user("citra")).unwrap();

    users
        .update(
            id,
            &UserUpdate {
                username: "citra".to_string(),
                password: None,
                name: "Citra Renamed".to_string(),
                role: Role::Guru,
                nip: None,
            },
        )
        .unwrap();

    let user = users.authenticate("citra", "rahasia").unwrap().unwrap();
    assert_eq!(user.name, "Citra Renamed");
    assert_eq!(user.role, Role::Guru);
    assert_eq!(user.nip, None);

    users
        .update(
            id,
            &UserUpdate {
                username: "citra".to_string(),
                password: Some("baru".to_string()),
                name: "Citra Renamed".to_string(),
                role: Role::Guru,
                nip: None,
            },
        )
        .unwrap();

    assert!(users.authenticate("citra", "rahasia").unwrap().is_none());
    assert!(users.authenticate("citra", "baru").unwrap().is_some());
}

#[test]
fn user_update_and_delete_report_not_found() {
    let conn = open_db_in_memory().unwrap();
    let users = UserRepository::new(&conn);

    let err = users
        .update(
            9999,
            &UserUpdate {
                username: "ghost".to_string(),
                password: None,
                name: "Ghost".to_string(),
                role: Role::Pegawai,
                nip: None,
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "user", id: 9999 }));

    let err = users.delete(9999).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "user", id: 9999 }));
}

#[test]
fn catalog_names_are_unique_and_listed_sorted() {
    let conn = open_db_in_memory().unwrap();
    let admin = AdminService::new(&conn);

    admin.create_class("7B").unwrap();
    admin.create_class("7A").unwrap();
    let err = admin.create_class("7A").unwrap_err();
    assert!(matches!(
        err,
        RepoError::DuplicateName { entity: "class", .. }
    ));

    let names: Vec<_> = admin
        .list_classes()
        .unwrap()
        .into_iter()
        .map(|class| class.name)
        .collect();
    assert_eq!(names, ["7A", "7B"]);

    admin.create_subject("Matematika").unwrap();
    let err = admin.create_subject("Matematika").unwrap_err();
    assert!(matches!(
        err,
        RepoError::DuplicateName { entity: "subject", .. }
    ));
}

#[test]
fn zone_replacement_swaps_the_whole_registry() {
    let conn = open_db_in_memory().unwrap();
    let admin = AdminService::new(&conn);

    // Seeded default zone.
    let zones = admin.list_zones().unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].name, "Sekolah");
    assert_eq!(zones[0].radius_m, 100.0);

    admin
        .replace_zones(&[
            NewZone {
                name: "Gedung A".to_string(),
                center: Coordinate::new(-6.2000, 106.8166),
                radius_m: 80.0,
            },
            NewZone {
                name: "Gedung B".to_string(),
                center: Coordinate::new(-6.2010, 106.8170),
                radius_m: 120.0,
            },
        ])
        .unwrap();

    let zones = admin.list_zones().unwrap();
    let names: Vec<_> = zones.iter().map(|zone| zone.name.as_str()).collect();
    assert_eq!(names, ["Gedung A", "Gedung B"]);
}

#[test]
fn dashboard_stats_count_users_attendance_and_pending_requests() {
    let conn = open_db_in_memory().unwrap();
    let admin = AdminService::new(&conn);

    // Fresh database: only the two seeded accounts.
    let stats = admin.stats().unwrap();
    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.today_attendance, 0);
    assert_eq!(stats.pending_permissions, 0);

    let user_id = UserRepository::new(&conn).create(&new_user("dodi")).unwrap();
    let service = AttendanceService::new(SqliteAttendanceRepository::new(&conn));
    service
        .submit(
            &SubmitAttendance {
                user_id,
                kind: AttendanceKind::CheckIn,
                coordinate: Some(Coordinate::new(-6.2005, 106.8166)),
                address: None,
                selfie: Some("x".to_string()),
            },
            &[],
        )
        .unwrap();
    // Both actions of one user still count once.
    service
        .submit(
            &SubmitAttendance {
                user_id,
                kind: AttendanceKind::CheckOut,
                coordinate: Some(Coordinate::new(-6.2005, 106.8166)),
                address: None,
                selfie: Some("x".to_string()),
            },
            &[],
        )
        .unwrap();

    let stats = admin.stats().unwrap();
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.today_attendance, 1);
}
