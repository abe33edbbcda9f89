//! Deputy repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `deputies` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Each operation runs as one autocommit statement; there is no
//!   multi-operation transaction.
//! - Deleting a deputy never touches referencing member rows.
//! - Read paths reject rows whose `type` text is not a known classification.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::deputy::{Deputy, DeputyId, DeputyType};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEPUTY_SELECT_SQL: &str = "SELECT id, name, type FROM deputies";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for registry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from an expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Explicit result of an update or delete statement.
///
/// A missing id is a reportable outcome, not an error: the caller can tell
/// "applied" from "nothing matched" without an error path, and the store is
/// untouched in the latter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Exactly one row was written or removed.
    Applied,
    /// No row matched the given id; the table is unchanged.
    NotFound,
}

impl MutationOutcome {
    /// Maps an affected-row count onto the outcome.
    pub fn from_changed_rows(changed: usize) -> Self {
        if changed == 0 {
            Self::NotFound
        } else {
            Self::Applied
        }
    }
}

/// Repository interface for deputy CRUD operations.
pub trait DeputyRepository {
    /// Inserts one deputy and returns the store-assigned id.
    fn add_deputy(&self, name: &str, kind: DeputyType) -> RepoResult<DeputyId>;
    /// Loads one deputy by id.
    fn get_deputy(&self, id: DeputyId) -> RepoResult<Option<Deputy>>;
    /// Lists deputies in insertion order, optionally restricted to one kind.
    fn list_deputies(&self, kind: Option<DeputyType>) -> RepoResult<Vec<Deputy>>;
    /// Overwrites all mutable fields of one deputy.
    fn update_deputy(
        &self,
        id: DeputyId,
        name: &str,
        kind: DeputyType,
    ) -> RepoResult<MutationOutcome>;
    /// Removes one deputy row. Referencing members keep their stored id.
    fn delete_deputy(&self, id: DeputyId) -> RepoResult<MutationOutcome>;
}

/// SQLite-backed deputy repository.
pub struct SqliteDeputyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDeputyRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_deputy_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl DeputyRepository for SqliteDeputyRepository<'_> {
    fn add_deputy(&self, name: &str, kind: DeputyType) -> RepoResult<DeputyId> {
        self.conn.execute(
            "INSERT INTO deputies (name, type) VALUES (?1, ?2);",
            params![name, deputy_type_to_db(kind)],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_deputy(&self, id: DeputyId) -> RepoResult<Option<Deputy>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPUTY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_deputy_row(row)?));
        }

        Ok(None)
    }

    fn list_deputies(&self, kind: Option<DeputyType>) -> RepoResult<Vec<Deputy>> {
        let mut sql = String::from(DEPUTY_SELECT_SQL);
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(kind) = kind {
            sql.push_str(" WHERE type = ?");
            bind_values.push(Value::Text(deputy_type_to_db(kind).to_string()));
        }

        sql.push_str(" ORDER BY id ASC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut deputies = Vec::new();

        while let Some(row) = rows.next()? {
            deputies.push(parse_deputy_row(row)?);
        }

        Ok(deputies)
    }

    fn update_deputy(
        &self,
        id: DeputyId,
        name: &str,
        kind: DeputyType,
    ) -> RepoResult<MutationOutcome> {
        let changed = self.conn.execute(
            "UPDATE deputies SET name = ?1, type = ?2 WHERE id = ?3;",
            params![name, deputy_type_to_db(kind), id],
        )?;

        Ok(MutationOutcome::from_changed_rows(changed))
    }

    fn delete_deputy(&self, id: DeputyId) -> RepoResult<MutationOutcome> {
        let changed = self
            .conn
            .execute("DELETE FROM deputies WHERE id = ?1;", params![id])?;

        Ok(MutationOutcome::from_changed_rows(changed))
    }
}

fn parse_deputy_row(row: &Row<'_>) -> RepoResult<Deputy> {
    let type_text: String = row
        .get::<_, Option<String>>("type")?
        .unwrap_or_default();
    let kind = parse_deputy_type(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid deputy type `{type_text}` in deputies.type"))
    })?;

    Ok(Deputy {
        id: row.get("id")?,
        name: row.get::<_, Option<String>>("name")?.unwrap_or_default(),
        kind,
    })
}

fn deputy_type_to_db(kind: DeputyType) -> &'static str {
    match kind {
        DeputyType::Federal => "federal",
        DeputyType::State => "state",
    }
}

fn parse_deputy_type(value: &str) -> Option<DeputyType> {
    match value {
        "federal" => Some(DeputyType::Federal),
        "state" => Some(DeputyType::State),
        _ => None,
    }
}

fn ensure_deputy_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "deputies")? {
        return Err(RepoError::MissingRequiredTable("deputies"));
    }

    for column in ["id", "name", "type"] {
        if !table_has_column(conn, "deputies", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "deputies",
                column,
            });
        }
    }

    Ok(())
}

pub(crate) fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

pub(crate) fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::{deputy_type_to_db, parse_deputy_type, MutationOutcome};
    use crate::model::deputy::DeputyType;

    #[test]
    fn type_codec_roundtrips_both_kinds() {
        for kind in [DeputyType::Federal, DeputyType::State] {
            assert_eq!(parse_deputy_type(deputy_type_to_db(kind)), Some(kind));
        }
    }

    #[test]
    fn unknown_type_text_does_not_parse() {
        assert_eq!(parse_deputy_type("municipal"), None);
        assert_eq!(parse_deputy_type(""), None);
        assert_eq!(parse_deputy_type("Federal"), None);
    }

    #[test]
    fn mutation_outcome_maps_changed_row_counts() {
        assert_eq!(
            MutationOutcome::from_changed_rows(0),
            MutationOutcome::NotFound
        );
        assert_eq!(
            MutationOutcome::from_changed_rows(1),
            MutationOutcome::Applied
        );
    }
}
