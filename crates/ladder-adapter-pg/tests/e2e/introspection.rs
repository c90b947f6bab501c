//! Schema introspection tests.

use super::common::*;

pub async fn test_list_tables(ctx: &TestContext) {
    println!("  🧪 test_list_tables");

    let mut tables = ctx.database().list_tables().await.expect("list tables");
    tables.sort();
    assert_eq!(tables, cols(&["player_has_r1", "ranking"]));

    println!("     ✓ Both demo tables listed");
}

pub async fn test_list_columns_in_ordinal_order(ctx: &TestContext) {
    println!("  🧪 test_list_columns_in_ordinal_order");

    let columns = ctx
        .database()
        .list_columns("player_has_r1")
        .await
        .expect("list columns");
    assert_eq!(
        columns,
        cols(&["playerid", "points", "username", "rankingid", "statid", "wins", "losses"])
    );

    println!("     ✓ Columns returned in declaration order");
}

pub async fn test_list_columns_folds_case(ctx: &TestContext) {
    println!("  🧪 test_list_columns_folds_case");

    let columns = ctx
        .database()
        .list_columns("Ranking")
        .await
        .expect("list columns");
    assert_eq!(columns, cols(&["rankingid", "tier", "minpoints"]));

    println!("     ✓ Mixed-case table name resolved");
}

pub async fn test_list_columns_unknown_table_is_empty(ctx: &TestContext) {
    println!("  🧪 test_list_columns_unknown_table_is_empty");

    let db = ctx.database();
    for name in ["no_such_table", "pg_class", "", "ranking; DROP TABLE ranking"] {
        let columns = db.list_columns(name).await.expect("unknown table is not an error");
        assert!(columns.is_empty(), "expected no columns for {:?}", name);
    }
    assert_eq!(ranking_count(ctx).await, 5);

    println!("     ✓ Unknown tables yield empty column lists");
}

pub async fn run_all_tests(ctx: &TestContext) {
    println!("\n📂 Introspection Tests");
    ctx.reset().await.expect("reset database");

    test_list_tables(ctx).await;
    test_list_columns_in_ordinal_order(ctx).await;
    test_list_columns_folds_case(ctx).await;
    test_list_columns_unknown_table_is_empty(ctx).await;
}
