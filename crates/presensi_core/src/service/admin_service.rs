//! Admin facade over the management repositories.
//!
//! # Responsibility
//! - Bundle user/catalog/zone management and the dashboard aggregates
//!   behind one handle for the admin screens.
//!
//! # Invariants
//! - Pure delegation: every rule lives in the repositories; this layer
//!   adds no behavior of its own.

use rusqlite::Connection;

use crate::model::attendance::{AttendanceView, UserId};
use crate::model::catalog::{SchoolClass, Subject};
use crate::model::geo::{GeoZone, ZoneId};
use crate::model::journal::JournalView;
use crate::model::permission::{PermissionStatus, PermissionView};
use crate::model::user::{NewUser, User, UserUpdate};
use crate::repo::attendance_repo::{AttendanceRepository, SqliteAttendanceRepository};
use crate::repo::catalog_repo::CatalogRepository;
use crate::repo::geo_repo::{GeoZoneRepository, NewZone};
use crate::repo::journal_repo::JournalRepository;
use crate::repo::permission_repo::PermissionRepository;
use crate::repo::stats::{dashboard_stats, DashboardStats};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;

/// Admin use-case facade bound to one connection.
pub struct AdminService<'conn> {
    conn: &'conn Connection,
}

impl<'conn> AdminService<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn stats(&self) -> RepoResult<DashboardStats> {
        dashboard_stats(self.conn)
    }

    // Users

    pub fn list_users(&self) -> RepoResult<Vec<User>> {
        UserRepository::new(self.conn).list()
    }

    pub fn create_user(&self, user: &NewUser) -> RepoResult<UserId> {
        UserRepository::new(self.conn).create(user)
    }

    pub fn update_user(&self, id: UserId, update: &UserUpdate) -> RepoResult<()> {
        UserRepository::new(self.conn).update(id, update)
    }

    pub fn delete_user(&self, id: UserId) -> RepoResult<()> {
        UserRepository::new(self.conn).delete(id)
    }

    // Catalog

    pub fn list_classes(&self) -> RepoResult<Vec<SchoolClass>> {
        CatalogRepository::new(self.conn).list_classes()
    }

    pub fn create_class(&self, name: &str) -> RepoResult<i64> {
        CatalogRepository::new(self.conn).create_class(name)
    }

    pub fn list_subjects(&self) -> RepoResult<Vec<Subject>> {
        CatalogRepository::new(self.conn).list_subjects()
    }

    pub fn create_subject(&self, name: &str) -> RepoResult<i64> {
        CatalogRepository::new(self.conn).create_subject(name)
    }

    // Zones

    pub fn list_zones(&self) -> RepoResult<Vec<GeoZone>> {
        GeoZoneRepository::new(self.conn).list_zones()
    }

    pub fn replace_zones(&self, zones: &[NewZone]) -> RepoResult<Vec<ZoneId>> {
        GeoZoneRepository::new(self.conn).replace_zones(zones)
    }

    // Listings

    pub fn list_attendance(&self) -> RepoResult<Vec<AttendanceView>> {
        SqliteAttendanceRepository::new(self.conn).list_all()
    }

    pub fn list_journals(&self) -> RepoResult<Vec<JournalView>> {
        JournalRepository::new(self.conn).list_all()
    }

    pub fn list_permissions(&self) -> RepoResult<Vec<PermissionView>> {
        PermissionRepository::new(self.conn).list_all()
    }

    pub fn resolve_permission(&self, id: i64, status: PermissionStatus) -> RepoResult<()> {
        PermissionRepository::new(self.conn).update_status(id, status)
    }
}
