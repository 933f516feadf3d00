//! User account persistence.
//!
//! # Responsibility
//! - Authenticate credentials and provide account CRUD for the admin
//!   screens.
//!
//! # Invariants
//! - The password column never leaves this module; every select excludes
//!   it.
//! - Updates with `password: None` leave the stored password untouched.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::model::attendance::UserId;
use crate::model::user::{NewUser, Role, User, UserUpdate};
use crate::repo::{is_constraint_on, RepoError, RepoResult};

const USER_SELECT_SQL: &str = "SELECT id, username, name, role, nip FROM users";

/// SQLite-backed user repository.
pub struct UserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> UserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Looks up an account by exact credential match.
    ///
    /// Returns `None` for unknown username or wrong password; the two cases
    /// are deliberately indistinguishable to the caller.
    pub fn authenticate(&self, username: &str, password: &str) -> RepoResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("{USER_SELECT_SQL} WHERE username = ?1 AND password = ?2;"),
                params![username, password],
                |row| Ok(parse_user_row(row)),
            )
            .optional()?
            .transpose()?;
        Ok(user)
    }

    pub fn list(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }
        Ok(users)
    }

    pub fn create(&self, user: &NewUser) -> RepoResult<UserId> {
        let inserted = self.conn.execute(
            "INSERT INTO users (username, password, name, role, nip)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                user.username.as_str(),
                user.password.as_str(),
                user.name.as_str(),
                user.role.as_db(),
                user.nip.as_deref(),
            ],
        );

        match inserted {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) if is_constraint_on(&err, "users.username") => {
                Err(RepoError::DuplicateName {
                    entity: "user",
                    name: user.username.clone(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn update(&self, id: UserId, update: &UserUpdate) -> RepoResult<()> {
        let changed = match update.password.as_deref() {
            Some(password) => self.conn.execute(
                "UPDATE users
                 SET username = ?1, password = ?2, name = ?3, role = ?4, nip = ?5
                 WHERE id = ?6;",
                params![
                    update.username.as_str(),
                    password,
                    update.name.as_str(),
                    update.role.as_db(),
                    update.nip.as_deref(),
                    id,
                ],
            ),
            None => self.conn.execute(
                "UPDATE users
                 SET username = ?1, name = ?2, role = ?3, nip = ?4
                 WHERE id = ?5;",
                params![
                    update.username.as_str(),
                    update.name.as_str(),
                    update.role.as_db(),
                    update.nip.as_deref(),
                    id,
                ],
            ),
        };

        let changed = match changed {
            Ok(changed) => changed,
            Err(err) if is_constraint_on(&err, "users.username") => {
                return Err(RepoError::DuplicateName {
                    entity: "user",
                    name: update.username.clone(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "user",
                id,
            });
        }
        Ok(())
    }

    pub fn delete(&self, id: UserId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM users WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "user",
                id,
            });
        }
        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let role_text: String = row.get("role")?;
    let role = Role::from_db(&role_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid role `{role_text}` in users.role"))
    })?;

    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        name: row.get("name")?,
        role,
        nip: row.get("nip")?,
    })
}
