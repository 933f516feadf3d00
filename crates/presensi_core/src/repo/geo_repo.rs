//! Geofence zone persistence.
//!
//! # Responsibility
//! - Store and list the registered attendance zones consumed by the
//!   geofence evaluator.
//!
//! # Invariants
//! - `replace_zones` is transactional: readers never observe an empty
//!   registry between the delete and the inserts.

use rusqlite::{params, Connection};

use crate::model::geo::{Coordinate, GeoZone, ZoneId};
use crate::repo::RepoResult;

/// Zone payload for create/replace operations.
#[derive(Debug, Clone, PartialEq)]
pub struct NewZone {
    pub name: String,
    pub center: Coordinate,
    pub radius_m: f64,
}

/// SQLite-backed geofence zone repository.
pub struct GeoZoneRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> GeoZoneRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn list_zones(&self) -> RepoResult<Vec<GeoZone>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, latitude, longitude, radius
             FROM geolocations
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut zones = Vec::new();
        while let Some(row) = rows.next()? {
            zones.push(GeoZone {
                id: row.get("id")?,
                name: row.get("name")?,
                center: Coordinate::new(row.get("latitude")?, row.get("longitude")?),
                radius_m: row.get("radius")?,
            });
        }
        Ok(zones)
    }

    pub fn create_zone(&self, zone: &NewZone) -> RepoResult<ZoneId> {
        self.conn.execute(
            "INSERT INTO geolocations (name, latitude, longitude, radius)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                zone.name.as_str(),
                zone.center.latitude,
                zone.center.longitude,
                zone.radius_m,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Replaces the whole registry with the given zones in one transaction.
    ///
    /// Mirrors the admin endpoint that re-registers the school zone by
    /// clearing the table first.
    pub fn replace_zones(&self, zones: &[NewZone]) -> RepoResult<Vec<ZoneId>> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM geolocations;", [])?;

        let mut ids = Vec::with_capacity(zones.len());
        for zone in zones {
            tx.execute(
                "INSERT INTO geolocations (name, latitude, longitude, radius)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    zone.name.as_str(),
                    zone.center.latitude,
                    zone.center.longitude,
                    zone.radius_m,
                ],
            )?;
            ids.push(tx.last_insert_rowid());
        }

        tx.commit()?;
        Ok(ids)
    }
}
