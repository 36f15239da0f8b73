use chrono::{DateTime, Utc};
use practice_core::model::{
    AssessmentSession, AssessmentSessionId, NewAssessmentSession, SessionStats,
};
use serde_json::Value;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::SqliteRepository;
use super::mapping::{db, id_to_i64, ser, session_id_from_i64};
use crate::repository::{AssessmentSessionRepository, StorageError};

fn map_session_row(row: &SqliteRow) -> Result<AssessmentSession, StorageError> {
    let answers_json: String = row.try_get("answers").map_err(ser)?;
    let answers: Vec<Value> = serde_json::from_str(&answers_json).map_err(ser)?;

    Ok(AssessmentSession::from_persisted(
        session_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        row.try_get::<Option<String>, _>("user_id").map_err(ser)?,
        answers,
        row.try_get::<Option<f64>, _>("score").map_err(ser)?,
        row.try_get::<String, _>("completed_at").map_err(ser)?,
        row.try_get("created_at").map_err(ser)?,
    ))
}

#[async_trait::async_trait]
impl AssessmentSessionRepository for SqliteRepository {
    async fn insert_session(
        &self,
        submission: &NewAssessmentSession,
        created_at: DateTime<Utc>,
    ) -> Result<AssessmentSessionId, StorageError> {
        let answers = serde_json::to_string(&submission.answers).map_err(ser)?;

        let res = sqlx::query(
            r"
                INSERT INTO assessment_sessions (user_id, answers, score, completed_at, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(submission.user_id.as_deref())
        .bind(answers)
        .bind(submission.score)
        .bind(submission.completed_at.as_str())
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(db)?;

        session_id_from_i64(res.last_insert_rowid())
    }

    async fn get_session(
        &self,
        id: AssessmentSessionId,
    ) -> Result<Option<AssessmentSession>, StorageError> {
        let row = sqlx::query(
            r"
                SELECT id, user_id, answers, score, completed_at, created_at
                FROM assessment_sessions
                WHERE id = ?1
            ",
        )
        .bind(id_to_i64("session_id", id.value())?)
        .fetch_optional(&self.pool)
        .await
        .map_err(db)?;

        row.as_ref().map(map_session_row).transpose()
    }

    async fn list_sessions_for_user(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<AssessmentSession>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT id, user_id, answers, score, completed_at, created_at
                FROM assessment_sessions
                WHERE user_id = ?1
                ORDER BY created_at DESC, id DESC
                LIMIT ?2
            ",
        )
        .bind(user_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(db)?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_session_row(&row)?);
        }
        Ok(out)
    }

    async fn session_stats_for_user(&self, user_id: &str) -> Result<SessionStats, StorageError> {
        let row = sqlx::query(
            r"
                SELECT COUNT(*) AS total,
                       COUNT(score) AS scored,
                       AVG(score) AS average_score,
                       MAX(score) AS best_score
                FROM assessment_sessions
                WHERE user_id = ?1
            ",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db)?;

        let count = |column: &str| -> Result<u64, StorageError> {
            let value: i64 = row.try_get(column).map_err(ser)?;
            u64::try_from(value).map_err(ser)
        };

        Ok(SessionStats {
            total: count("total")?,
            scored: count("scored")?,
            average_score: row.try_get("average_score").map_err(ser)?,
            best_score: row.try_get("best_score").map_err(ser)?,
        })
    }
}
