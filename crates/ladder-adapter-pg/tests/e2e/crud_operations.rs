//! CRUD tests: inserts, updates, partial win/loss updates, counts and deletes.

use super::common::*;
use ladder_adapter_pg::DbError;
use ladder_core::{NewPlayer, WinLossPatch};

fn new_player(id: &str, stat: &str) -> NewPlayer {
    NewPlayer {
        player_id: Some(id.to_string()),
        points: 0,
        username: Some(format!("user_{}", id)),
        ranking_id: Some("R1".to_string()),
        stat_id: Some(stat.to_string()),
        wins: 0,
        losses: 0,
    }
}

pub async fn test_fetch_tables(ctx: &TestContext) {
    println!("  🧪 test_fetch_tables");

    let db = ctx.database();
    let players = db.fetch_players().await.expect("fetch players");
    assert_eq!(players.len(), 4);
    let owl = players.iter().find(|p| p.player_id == "P001").unwrap();
    assert_eq!(owl.username.as_deref(), Some("nightowl"));
    assert_eq!(owl.points, Some(2450));

    let rankings = db.fetch_rankings().await.expect("fetch rankings");
    assert_eq!(rankings.len(), 5);
    assert!(rankings.iter().any(|r| r.ranking_id == "R3" && r.tier.as_deref() == Some("Gold")));

    println!("     ✓ Player and ranking tables read");
}

pub async fn test_insert_and_count(ctx: &TestContext) {
    println!("  🧪 test_insert_and_count");

    let db = ctx.database();
    let before = db.count_players().await.expect("count");
    assert!(db.insert_player(&new_player("P100", "S100")).await.unwrap());
    assert_eq!(db.count_players().await.unwrap(), before + 1);

    println!("     ✓ Insert adds exactly one row");
}

pub async fn test_insert_duplicate_is_query_error(ctx: &TestContext) {
    println!("  🧪 test_insert_duplicate_is_query_error");

    let db = ctx.database();
    let before = player_count(ctx).await;
    let err = db.insert_player(&new_player("P001", "S777")).await.unwrap_err();
    assert!(matches!(err, DbError::Query(_)), "unexpected error: {:?}", err);

    let mut missing_ranking = new_player("P101", "S101");
    missing_ranking.ranking_id = None;
    assert!(db.insert_player(&missing_ranking).await.is_err());
    assert_eq!(player_count(ctx).await, before);

    println!("     ✓ Constraint violations surface as query errors");
}

pub async fn test_single_field_updates(ctx: &TestContext) {
    println!("  🧪 test_single_field_updates");

    let db = ctx.database();
    assert!(db.update_username("P002", Some("slowdraw")).await.unwrap());
    assert!(db.update_points("P002", Some(1250)).await.unwrap());
    assert!(db.update_ranking("P002", Some("R3")).await.unwrap());
    assert!(db.update_stat_id("P002", Some("S202")).await.unwrap());

    let p = db
        .fetch_players()
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.player_id == "P002")
        .unwrap();
    assert_eq!(p.username.as_deref(), Some("slowdraw"));
    assert_eq!(p.points, Some(1250));
    assert_eq!(p.ranking_id, "R3");
    assert_eq!(p.stat_id, "S202");

    println!("     ✓ Each single-field update applied");
}

pub async fn test_update_unknown_player_is_false(ctx: &TestContext) {
    println!("  🧪 test_update_unknown_player_is_false");

    let db = ctx.database();
    assert!(!db.update_username("NOPE", Some("ghost")).await.unwrap());
    assert!(!db.update_points("NOPE", Some(1)).await.unwrap());

    println!("     ✓ Zero affected rows reported as false");
}

pub async fn test_win_loss_no_fields_is_noop(ctx: &TestContext) {
    println!("  🧪 test_win_loss_no_fields_is_noop");

    let before = win_loss(ctx, "P003").await;
    let updated = ctx
        .database()
        .update_win_loss("P003", WinLossPatch::default())
        .await
        .unwrap();
    assert!(!updated);
    assert_eq!(win_loss(ctx, "P003").await, before);

    println!("     ✓ Empty patch returns false and leaves the row alone");
}

pub async fn test_win_loss_partial(ctx: &TestContext) {
    println!("  🧪 test_win_loss_partial");

    let db = ctx.database();
    let patch = WinLossPatch {
        wins: None,
        losses: Some(10),
    };
    assert!(db.update_win_loss("P003", patch).await.unwrap());
    assert_eq!(win_loss(ctx, "P003").await, (Some(3), Some(10)));

    let patch = WinLossPatch {
        wins: Some(4),
        losses: Some(11),
    };
    assert!(db.update_win_loss("P003", patch).await.unwrap());
    assert_eq!(win_loss(ctx, "P003").await, (Some(4), Some(11)));

    println!("     ✓ Only present fields are written");
}

pub async fn test_delete_ranking(ctx: &TestContext) {
    println!("  🧪 test_delete_ranking");

    let db = ctx.database();
    let before = ranking_count(ctx).await;

    assert!(!db.delete_ranking("R404").await.unwrap());
    assert_eq!(ranking_count(ctx).await, before);

    assert!(db.delete_ranking("R9").await.unwrap());
    assert_eq!(ranking_count(ctx).await, before - 1);

    assert!(!db.delete_ranking("R9").await.unwrap());
    assert_eq!(ranking_count(ctx).await, before - 1);

    println!("     ✓ Missing ids report false without touching the table");
}

pub async fn test_delete_referenced_ranking_fails(ctx: &TestContext) {
    println!("  🧪 test_delete_referenced_ranking_fails");

    let before = ranking_count(ctx).await;
    let err = ctx.database().delete_ranking("R4").await.unwrap_err();
    assert!(matches!(err, DbError::Query(_)));
    assert_eq!(ranking_count(ctx).await, before);

    println!("     ✓ Foreign key protects referenced rankings");
}

pub async fn test_ping(ctx: &TestContext) {
    println!("  🧪 test_ping");
    ctx.database().ping().await.expect("ping");
    println!("     ✓ Connection check succeeds");
}

pub async fn run_all_tests(ctx: &TestContext) {
    println!("\n📂 CRUD Operations Tests");
    ctx.reset().await.expect("reset database");

    test_ping(ctx).await;
    test_fetch_tables(ctx).await;
    test_insert_and_count(ctx).await;
    test_insert_duplicate_is_query_error(ctx).await;
    test_single_field_updates(ctx).await;
    test_update_unknown_player_is_false(ctx).await;
    test_win_loss_no_fields_is_noop(ctx).await;
    test_win_loss_partial(ctx).await;
    test_delete_ranking(ctx).await;
    test_delete_referenced_ranking_fails(ctx).await;
}
