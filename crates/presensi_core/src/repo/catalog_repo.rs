//! Class and subject catalog persistence.
//!
//! Both tables are simple named rows; the only rule is display-name
//! uniqueness, surfaced as [`RepoError::DuplicateName`].

use rusqlite::Connection;

use crate::model::catalog::{SchoolClass, Subject};
use crate::repo::{is_constraint_on, RepoError, RepoResult};

/// SQLite-backed catalog repository for classes and subjects.
pub struct CatalogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> CatalogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn list_classes(&self) -> RepoResult<Vec<SchoolClass>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM classes ORDER BY name ASC;")?;
        let mut rows = stmt.query([])?;
        let mut classes = Vec::new();
        while let Some(row) = rows.next()? {
            classes.push(SchoolClass {
                id: row.get("id")?,
                name: row.get("name")?,
            });
        }
        Ok(classes)
    }

    pub fn create_class(&self, name: &str) -> RepoResult<i64> {
        match self
            .conn
            .execute("INSERT INTO classes (name) VALUES (?1);", [name])
        {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) if is_constraint_on(&err, "classes.name") => {
                Err(RepoError::DuplicateName {
                    entity: "class",
                    name: name.to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn list_subjects(&self) -> RepoResult<Vec<Subject>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM subjects ORDER BY name ASC;")?;
        let mut rows = stmt.query([])?;
        let mut subjects = Vec::new();
        while let Some(row) = rows.next()? {
            subjects.push(Subject {
                id: row.get("id")?,
                name: row.get("name")?,
            });
        }
        Ok(subjects)
    }

    pub fn create_subject(&self, name: &str) -> RepoResult<i64> {
        match self
            .conn
            .execute("INSERT INTO subjects (name) VALUES (?1);", [name])
        {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) if is_constraint_on(&err, "subjects.name") => {
                Err(RepoError::DuplicateName {
                    entity: "subject",
                    name: name.to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}
