use rusqlite::Connection;
use voteboard_core::db::open_db_in_memory;
use voteboard_core::{
    DeputyRepository, DeputyType, MemberDraft, MemberRepository, MemberService, MutationOutcome,
    RepoError, SqliteDeputyRepository, SqliteMemberRepository,
};

#[test]
fn add_and_get_resolve_deputy_references() {
    let conn = open_db_in_memory().unwrap();
    let deputies = SqliteDeputyRepository::try_new(&conn).unwrap();
    let members = SqliteMemberRepository::try_new(&conn).unwrap();

    let federal_id = deputies
        .add_deputy("Deputy Silva", DeputyType::Federal)
        .unwrap();
    let state_id = deputies.add_deputy("Deputy Souza", DeputyType::State).unwrap();

    let mut draft = MemberDraft::new("Ana", 100, "coordinator", 50.0);
    draft.federal_deputy_id = Some(federal_id);
    draft.state_deputy_id = Some(state_id);
    let id = members.add_member(&draft).unwrap();

    let view = members.get_member(id).unwrap().unwrap();
    assert_eq!(view.id, id);
    assert_eq!(view.name, "Ana");
    assert_eq!(view.votes, Some(100));
    assert_eq!(view.role, "coordinator");
    assert_eq!(view.percentage, Some(50.0));
    assert_eq!(view.federal_deputy_id, Some(federal_id));
    assert_eq!(view.federal_deputy.as_deref(), Some("Deputy Silva"));
    assert_eq!(view.state_deputy_id, Some(state_id));
    assert_eq!(view.state_deputy.as_deref(), Some("Deputy Souza"));
}

#[test]
fn member_without_references_resolves_to_none() {
    let conn = open_db_in_memory().unwrap();
    let members = SqliteMemberRepository::try_new(&conn).unwrap();

    let id = members
        .add_member(&MemberDraft::new("Beto", 250, "mobilizer", 40.0))
        .unwrap();

    let view = members.get_member(id).unwrap().unwrap();
    assert_eq!(view.federal_deputy_id, None);
    assert_eq!(view.federal_deputy, None);
    assert_eq!(view.state_deputy_id, None);
    assert_eq!(view.state_deputy, None);
}

#[test]
fn get_members_lists_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let members = SqliteMemberRepository::try_new(&conn).unwrap();

    let first = members
        .add_member(&MemberDraft::new("Ana", 100, "coordinator", 50.0))
        .unwrap();
    let second = members
        .add_member(&MemberDraft::new("Beto", 250, "mobilizer", 40.0))
        .unwrap();

    let views = members.get_members().unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].id, first);
    assert_eq!(views[1].id, second);
}

#[test]
fn update_overwrites_every_mutable_field() {
    let conn = open_db_in_memory().unwrap();
    let deputies = SqliteDeputyRepository::try_new(&conn).unwrap();
    let members = SqliteMemberRepository::try_new(&conn).unwrap();

    let state_id = deputies.add_deputy("Deputy Souza", DeputyType::State).unwrap();
    let id = members
        .add_member(&MemberDraft::new("Ana", 100, "coordinator", 50.0))
        .unwrap();

    let mut replacement = MemberDraft::new("Ana Paula", 180, "driver", 25.0);
    replacement.state_deputy_id = Some(state_id);
    let outcome = members.update_member(id, &replacement).unwrap();
    assert_eq!(outcome, MutationOutcome::Applied);

    let view = members.get_member(id).unwrap().unwrap();
    assert_eq!(view.name, "Ana Paula");
    assert_eq!(view.votes, Some(180));
    assert_eq!(view.role, "driver");
    assert_eq!(view.percentage, Some(25.0));
    assert_eq!(view.federal_deputy_id, None);
    assert_eq!(view.state_deputy.as_deref(), Some("Deputy Souza"));
}

#[test]
fn update_missing_row_reports_not_found_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let members = SqliteMemberRepository::try_new(&conn).unwrap();

    let id = members
        .add_member(&MemberDraft::new("Ana", 100, "coordinator", 50.0))
        .unwrap();

    let outcome = members
        .update_member(id + 7, &MemberDraft::new("Ghost", 0, "none", 0.0))
        .unwrap();
    assert_eq!(outcome, MutationOutcome::NotFound);

    let views = members.get_members().unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].name, "Ana");
}

#[test]
fn delete_removes_row_and_repeat_delete_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let members = SqliteMemberRepository::try_new(&conn).unwrap();

    let id = members
        .add_member(&MemberDraft::new("Ana", 100, "coordinator", 50.0))
        .unwrap();

    assert_eq!(members.delete_member(id).unwrap(), MutationOutcome::Applied);
    assert!(members.get_member(id).unwrap().is_none());
    assert_eq!(members.delete_member(id).unwrap(), MutationOutcome::NotFound);
}

#[test]
fn inserting_reference_to_unknown_deputy_is_accepted() {
    let conn = open_db_in_memory().unwrap();
    let members = SqliteMemberRepository::try_new(&conn).unwrap();

    let mut draft = MemberDraft::new("Beto", 250, "mobilizer", 40.0);
    draft.federal_deputy_id = Some(4040);
    let id = members.add_member(&draft).unwrap();

    let stored: i64 = conn
        .query_row(
            "SELECT federal_deputy_id FROM members WHERE id = ?1;",
            [id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, 4040);

    let view = members.get_member(id).unwrap().unwrap();
    assert_eq!(view.federal_deputy_id, None);
    assert_eq!(view.federal_deputy, None);
}

#[test]
fn deleting_deputy_leaves_stored_reference_but_resolves_to_none() {
    let conn = open_db_in_memory().unwrap();
    let deputies = SqliteDeputyRepository::try_new(&conn).unwrap();
    let members = SqliteMemberRepository::try_new(&conn).unwrap();

    let state_id = deputies.add_deputy("Deputy Souza", DeputyType::State).unwrap();
    let mut draft = MemberDraft::new("Ana", 100, "coordinator", 50.0);
    draft.state_deputy_id = Some(state_id);
    let member_id = members.add_member(&draft).unwrap();

    assert_eq!(
        deputies.delete_deputy(state_id).unwrap(),
        MutationOutcome::Applied
    );

    let stored: i64 = conn
        .query_row(
            "SELECT state_deputy_id FROM members WHERE id = ?1;",
            [member_id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, state_id);

    let view = members.get_member(member_id).unwrap().unwrap();
    assert_eq!(view.state_deputy_id, None);
    assert_eq!(view.state_deputy, None);
}

#[test]
fn non_numeric_stored_cells_read_as_none() {
    let conn = open_db_in_memory().unwrap();
    let members = SqliteMemberRepository::try_new(&conn).unwrap();

    let id = members
        .add_member(&MemberDraft::new("Carla", 40, "volunteer", 25.0))
        .unwrap();
    conn.execute(
        "UPDATE members SET votes = 'many', percentage = 'half' WHERE id = ?1;",
        [id],
    )
    .unwrap();

    let view = members.get_member(id).unwrap().unwrap();
    assert_eq!(view.votes, None);
    assert_eq!(view.percentage, None);
}

#[test]
fn numeric_text_cells_still_read_as_numbers() {
    let conn = open_db_in_memory().unwrap();
    let members = SqliteMemberRepository::try_new(&conn).unwrap();

    let id = members
        .add_member(&MemberDraft::new("Carla", 40, "volunteer", 25.0))
        .unwrap();
    conn.execute(
        "UPDATE members SET votes = ' 42 ', percentage = '12.25' WHERE id = ?1;",
        [id],
    )
    .unwrap();

    let view = members.get_member(id).unwrap().unwrap();
    assert_eq!(view.votes, Some(42));
    assert_eq!(view.percentage, Some(12.25));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();
    let service = MemberService::new(repo);

    let id = service
        .add_member(&MemberDraft::new("Ana", 100, "coordinator", 50.0))
        .unwrap();

    let fetched = service.get_member(id).unwrap().unwrap();
    assert_eq!(fetched.name, "Ana");

    assert_eq!(
        service
            .update_member(id, &MemberDraft::new("Ana Paula", 120, "driver", 30.0))
            .unwrap(),
        MutationOutcome::Applied
    );
    assert_eq!(service.delete_member(id).unwrap(), MutationOutcome::Applied);
    assert!(service.get_members().unwrap().is_empty());
}

#[test]
fn repository_rejects_connection_without_required_members_table() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE members;").unwrap();

    let result = SqliteMemberRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("members"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_members_column() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("ALTER TABLE members DROP COLUMN percentage;")
        .unwrap();

    let result = SqliteMemberRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "members",
            column: "percentage"
        })
    ));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteMemberRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::UninitializedConnection { .. })
    ));
}
