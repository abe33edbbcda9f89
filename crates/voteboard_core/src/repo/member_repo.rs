//! Member repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `members` table.
//! - Produce the joined member view with both deputy references resolved.
//!
//! # Invariants
//! - Member reads resolve deputy references through the store (LEFT JOIN),
//!   never through stored display names.
//! - Numeric member cells decode leniently: NULL or non-numeric content
//!   surfaces as `None` and is coerced to zero by the reporting layer.
//! - Deputy references are written as given; existence of the referenced
//!   deputy is not checked.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::deputy::DeputyId;
use crate::model::member::{MemberDraft, MemberId, MemberView};
use crate::repo::deputy_repo::{
    table_exists, table_has_column, MutationOutcome, RepoError, RepoResult,
    SqliteDeputyRepository,
};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};

const MEMBER_VIEW_SELECT_SQL: &str = "SELECT
    m.id,
    m.name,
    m.votes,
    m.role,
    m.percentage,
    fd.id AS federal_deputy_id,
    fd.name AS federal_deputy,
    sd.id AS state_deputy_id,
    sd.name AS state_deputy
FROM members m
LEFT JOIN deputies fd ON m.federal_deputy_id = fd.id
LEFT JOIN deputies sd ON m.state_deputy_id = sd.id";

/// Repository interface for member CRUD operations.
pub trait MemberRepository {
    /// Inserts one member and returns the store-assigned id.
    fn add_member(&self, draft: &MemberDraft) -> RepoResult<MemberId>;
    /// Loads one joined member view by id.
    fn get_member(&self, id: MemberId) -> RepoResult<Option<MemberView>>;
    /// Lists all joined member views in insertion order.
    fn get_members(&self) -> RepoResult<Vec<MemberView>>;
    /// Overwrites all mutable fields of one member.
    fn update_member(&self, id: MemberId, draft: &MemberDraft) -> RepoResult<MutationOutcome>;
    /// Removes one member row.
    fn delete_member(&self, id: MemberId) -> RepoResult<MutationOutcome>;
}

/// SQLite-backed member repository.
pub struct SqliteMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemberRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    ///
    /// Member reads join against `deputies`, so readiness covers both tables.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let _ = SqliteDeputyRepository::try_new(conn)?;
        ensure_member_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl MemberRepository for SqliteMemberRepository<'_> {
    fn add_member(&self, draft: &MemberDraft) -> RepoResult<MemberId> {
        self.conn.execute(
            "INSERT INTO members (
                name,
                votes,
                role,
                percentage,
                federal_deputy_id,
                state_deputy_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                draft.name.as_str(),
                draft.votes,
                draft.role.as_str(),
                draft.percentage,
                draft.federal_deputy_id,
                draft.state_deputy_id,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_member(&self, id: MemberId) -> RepoResult<Option<MemberView>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_VIEW_SELECT_SQL} WHERE m.id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_member_view_row(row)?));
        }

        Ok(None)
    }

    fn get_members(&self) -> RepoResult<Vec<MemberView>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_VIEW_SELECT_SQL} ORDER BY m.id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut members = Vec::new();
        while let Some(row) = rows.next()? {
            members.push(parse_member_view_row(row)?);
        }

        Ok(members)
    }

    fn update_member(&self, id: MemberId, draft: &MemberDraft) -> RepoResult<MutationOutcome> {
        let changed = self.conn.execute(
            "UPDATE members
             SET
                name = ?1,
                votes = ?2,
                role = ?3,
                percentage = ?4,
                federal_deputy_id = ?5,
                state_deputy_id = ?6
             WHERE id = ?7;",
            params![
                draft.name.as_str(),
                draft.votes,
                draft.role.as_str(),
                draft.percentage,
                draft.federal_deputy_id,
                draft.state_deputy_id,
                id,
            ],
        )?;

        Ok(MutationOutcome::from_changed_rows(changed))
    }

    fn delete_member(&self, id: MemberId) -> RepoResult<MutationOutcome> {
        let changed = self
            .conn
            .execute("DELETE FROM members WHERE id = ?1;", params![id])?;

        Ok(MutationOutcome::from_changed_rows(changed))
    }
}

fn parse_member_view_row(row: &Row<'_>) -> RepoResult<MemberView> {
    Ok(MemberView {
        id: row.get("id")?,
        name: row.get::<_, Option<String>>("name")?.unwrap_or_default(),
        votes: coerce_i64(row.get_ref("votes")?),
        role: row.get::<_, Option<String>>("role")?.unwrap_or_default(),
        percentage: coerce_f64(row.get_ref("percentage")?),
        federal_deputy_id: row.get::<_, Option<DeputyId>>("federal_deputy_id")?,
        federal_deputy: row.get("federal_deputy")?,
        state_deputy_id: row.get::<_, Option<DeputyId>>("state_deputy_id")?,
        state_deputy: row.get("state_deputy")?,
    })
}

fn coerce_i64(value: ValueRef<'_>) -> Option<i64> {
    match value {
        ValueRef::Integer(number) => Some(number),
        ValueRef::Real(number) => Some(number as i64),
        ValueRef::Text(text) => std::str::from_utf8(text).ok()?.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_f64(value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Integer(number) => Some(number as f64),
        ValueRef::Real(number) => Some(number),
        ValueRef::Text(text) => std::str::from_utf8(text).ok()?.trim().parse().ok(),
        _ => None,
    }
}

fn ensure_member_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "members")? {
        return Err(RepoError::MissingRequiredTable("members"));
    }

    for column in [
        "id",
        "name",
        "votes",
        "role",
        "percentage",
        "federal_deputy_id",
        "state_deputy_id",
    ] {
        if !table_has_column(conn, "members", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "members",
                column,
            });
        }
    }

    Ok(())
}
