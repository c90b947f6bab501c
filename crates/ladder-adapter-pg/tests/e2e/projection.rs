//! Projection tests: row shape, ordering and allow-list rejections.

use super::common::*;
use ladder_adapter_pg::DbError;
use ladder_core::{NewPlayer, ProjectionError, ProjectionRequest};
use serde_json::json;

pub async fn test_projection_matches_requested_order(ctx: &TestContext) {
    println!("  🧪 test_projection_matches_requested_order");

    let request =
        ProjectionRequest::new("player_has_r1", cols(&["wins", "playerid", "username"])).unwrap();
    let rows = ctx.database().project(&request).await.expect("project");

    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.len() == 3));
    let apex = rows
        .iter()
        .find(|row| row[1] == json!("P004"))
        .expect("P004 row present");
    assert_eq!(apex, &vec![json!(77), json!("P004"), json!("apex")]);

    println!("     ✓ Row arity and field order follow the request");
}

pub async fn test_projection_keeps_duplicates(ctx: &TestContext) {
    println!("  🧪 test_projection_keeps_duplicates");

    let request = ProjectionRequest::new("RANKING", cols(&["Tier", "tier"])).unwrap();
    let rows = ctx.database().project(&request).await.expect("project");

    assert_eq!(rows.len(), 5);
    for row in &rows {
        assert_eq!(row.len(), 2);
        assert_eq!(row[0], row[1]);
    }

    println!("     ✓ Repeated column appears twice");
}

pub async fn test_unknown_column_rejected(ctx: &TestContext) {
    println!("  🧪 test_unknown_column_rejected");

    let request = ProjectionRequest::new(
        "player_has_r1",
        cols(&["username", "username\" FROM ranking; DROP TABLE ranking; --"]),
    )
    .unwrap();
    let err = ctx.database().project(&request).await.unwrap_err();

    assert!(
        matches!(
            err,
            DbError::Rejected(ProjectionError::UnknownColumn { ref column, .. })
                if column.starts_with("username\"")
        ),
        "unexpected error: {:?}",
        err
    );
    assert_eq!(ranking_count(ctx).await, 5);

    println!("     ✓ Injection attempt rejected before execution");
}

pub async fn test_column_of_other_table_rejected(ctx: &TestContext) {
    println!("  🧪 test_column_of_other_table_rejected");

    let request = ProjectionRequest::new("ranking", cols(&["username"])).unwrap();
    let err = ctx.database().project(&request).await.unwrap_err();
    assert!(matches!(
        err,
        DbError::Rejected(ProjectionError::UnknownColumn { .. })
    ));

    println!("     ✓ Columns are checked against their own table");
}

pub async fn test_unknown_table_rejected(ctx: &TestContext) {
    println!("  🧪 test_unknown_table_rejected");

    let request = ProjectionRequest::new("pg_authid", cols(&["rolpassword"])).unwrap();
    let err = ctx.database().project(&request).await.unwrap_err();
    assert!(matches!(
        err,
        DbError::Rejected(ProjectionError::UnknownTable(ref t)) if t == "pg_authid"
    ));

    println!("     ✓ Tables outside the schema are rejected");
}

pub async fn test_insert_then_project(ctx: &TestContext) {
    println!("  🧪 test_insert_then_project");

    let db = ctx.database();
    let player = NewPlayer {
        player_id: Some("P900".to_string()),
        points: 1500,
        username: Some("latecomer".to_string()),
        ranking_id: Some("R2".to_string()),
        stat_id: Some("S900".to_string()),
        wins: 5,
        losses: 1,
    };
    assert!(db.insert_player(&player).await.expect("insert"));

    let request = ProjectionRequest::new(
        "player_has_r1",
        cols(&["playerid", "points", "username", "rankingid", "statid", "wins", "losses"]),
    )
    .unwrap();
    let rows = db.project(&request).await.expect("project");
    let row = rows
        .iter()
        .find(|row| row[0] == json!("P900"))
        .expect("inserted row present");
    assert_eq!(
        row,
        &vec![
            json!("P900"),
            json!(1500),
            json!("latecomer"),
            json!("R2"),
            json!("S900"),
            json!(5),
            json!(1)
        ]
    );

    println!("     ✓ Projection reflects the inserted values");
}

pub async fn run_all_tests(ctx: &TestContext) {
    println!("\n📂 Projection Tests");
    ctx.reset().await.expect("reset database");

    test_projection_matches_requested_order(ctx).await;
    test_projection_keeps_duplicates(ctx).await;
    test_unknown_column_rejected(ctx).await;
    test_column_of_other_table_rejected(ctx).await;
    test_unknown_table_rejected(ctx).await;
    test_insert_then_project(ctx).await;
}
