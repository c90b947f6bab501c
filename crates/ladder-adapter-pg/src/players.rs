//! Statements against `player_has_r1`.
//!
//! Writes report `Ok(true)` when at least one row changed and `Ok(false)`
//! when none did (for example an unknown player id).

use crate::{Database, DbError};
use ladder_core::{NewPlayer, Player, WinLossPatch};
use sqlx::Row;
use sqlx::postgres::PgRow;

const SELECT_PLAYERS_SQL: &str = r#"
    select playerid, points, username, rankingid, statid, wins, losses
    from player_has_r1
"#;

const INSERT_PLAYER_SQL: &str = r#"
    insert into player_has_r1 (playerid, points, username, rankingid, statid, wins, losses)
    values ($1, $2, $3, $4, $5, $6, $7)
"#;

fn player_from_row(row: &PgRow) -> Result<Player, sqlx::Error> {
    Ok(Player {
        player_id: row.try_get("playerid")?,
        points: row.try_get("points")?,
        username: row.try_get("username")?,
        ranking_id: row.try_get("rankingid")?,
        stat_id: row.try_get("statid")?,
        wins: row.try_get("wins")?,
        losses: row.try_get("losses")?,
    })
}

impl Database {
    pub async fn fetch_players(&self) -> Result<Vec<Player>, DbError> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query(SELECT_PLAYERS_SQL)
            .fetch_all(&mut *conn)
            .await?;
        let players = rows
            .iter()
            .map(player_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(players)
    }

    pub async fn insert_player(&self, player: &NewPlayer) -> Result<bool, DbError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(INSERT_PLAYER_SQL)
            .bind(player.player_id.as_deref())
            .bind(player.points)
            .bind(player.username.as_deref())
            .bind(player.ranking_id.as_deref())
            .bind(player.stat_id.as_deref())
            .bind(player.wins)
            .bind(player.losses)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn update_username(
        &self,
        player_id: &str,
        username: Option<&str>,
    ) -> Result<bool, DbError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query("update player_has_r1 set username = $1 where playerid = $2")
            .bind(username)
            .bind(player_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn update_points(&self, player_id: &str, points: Option<i32>) -> Result<bool, DbError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query("update player_has_r1 set points = $1 where playerid = $2")
            .bind(points)
            .bind(player_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn update_ranking(
        &self,
        player_id: &str,
        ranking_id: Option<&str>,
    ) -> Result<bool, DbError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query("update player_has_r1 set rankingid = $1 where playerid = $2")
            .bind(ranking_id)
            .bind(player_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn update_stat_id(
        &self,
        player_id: &str,
        stat_id: Option<&str>,
    ) -> Result<bool, DbError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query("update player_has_r1 set statid = $1 where playerid = $2")
            .bind(stat_id)
            .bind(player_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Update wins and/or losses. Only present fields are written; with
    /// neither present nothing is sent to the server and `false` comes back.
    pub async fn update_win_loss(
        &self,
        player_id: &str,
        patch: WinLossPatch,
    ) -> Result<bool, DbError> {
        let (assignments, values) = patch.assignments();
        if assignments.is_empty() {
            tracing::debug!(player_id, "Win/loss update with no fields; skipping");
            return Ok(false);
        }

        let sql = format!(
            "update player_has_r1 set {} where playerid = ${}",
            assignments.join(", "),
            values.len() + 1
        );

        let mut conn = self.acquire().await?;
        let mut query = sqlx::query(&sql);
        for value in values {
            query = query.bind(value);
        }
        let result = query.bind(player_id).execute(&mut *conn).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count_players(&self) -> Result<i64, DbError> {
        let mut conn = self.acquire().await?;
        let count = sqlx::query_scalar::<_, i64>("select count(*) from player_has_r1")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }
}
