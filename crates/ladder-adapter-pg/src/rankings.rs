//! Statements against `ranking`.

use crate::{Database, DbError};
use ladder_core::Ranking;
use sqlx::Row;

impl Database {
    pub async fn fetch_rankings(&self) -> Result<Vec<Ranking>, DbError> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query("select rankingid, tier, minpoints from ranking")
            .fetch_all(&mut *conn)
            .await?;

        let mut rankings = Vec::with_capacity(rows.len());
        for row in rows {
            rankings.push(Ranking {
                ranking_id: row.try_get("rankingid")?,
                tier: row.try_get("tier")?,
                min_points: row.try_get("minpoints")?,
            });
        }
        Ok(rankings)
    }

    /// Delete a ranking by id. `Ok(false)` when no such ranking exists.
    ///
    /// Rankings still referenced by a player are protected by the foreign key
    /// and surface as a query error.
    pub async fn delete_ranking(&self, ranking_id: &str) -> Result<bool, DbError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query("delete from ranking where rankingid = $1")
            .bind(ranking_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
