use practice_core::model::{PracticeTrack, TrackId, TrackSlug, ValidatedTrack};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::SqliteRepository;
use super::mapping::{db, id_to_i64, ser, track_id_from_i64};
use crate::repository::{StorageError, TrackRepository};

fn track_from_row(row: &SqliteRow) -> Result<PracticeTrack, StorageError> {
    let slug = TrackSlug::from_persisted(row.try_get::<String, _>("slug").map_err(ser)?);
    Ok(PracticeTrack::from_persisted(
        track_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        row.try_get::<String, _>("title").map_err(ser)?,
        slug,
    ))
}

#[async_trait::async_trait]
impl TrackRepository for SqliteRepository {
    async fn insert_track(&self, track: ValidatedTrack) -> Result<TrackId, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO practice_tracks (title, slug)
            VALUES (?1, ?2)
            ",
        )
        .bind(track.title)
        .bind(track.slug.as_str())
        .execute(&self.pool)
        .await
        .map_err(db)?;

        track_id_from_i64(res.last_insert_rowid())
    }

    async fn list_tracks(&self) -> Result<Vec<PracticeTrack>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, title, slug
            FROM practice_tracks
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db)?;

        let mut tracks = Vec::with_capacity(rows.len());
        for row in rows {
            tracks.push(track_from_row(&row)?);
        }
        Ok(tracks)
    }

    async fn find_track_by_slug(&self, slug: &str) -> Result<Option<PracticeTrack>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, title, slug
            FROM practice_tracks
            WHERE slug = ?1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(db)?;

        match row {
            Some(row) => track_from_row(&row).map(Some),
            None => Ok(None),
        }
    }

    async fn update_track_slug(&self, id: TrackId, slug: &TrackSlug) -> Result<(), StorageError> {
        let res = sqlx::query(
            r"
            UPDATE practice_tracks
            SET slug = ?1
            WHERE id = ?2
            ",
        )
        .bind(slug.as_str())
        .bind(id_to_i64("track_id", id.value())?)
        .execute(&self.pool)
        .await
        .map_err(db)?;

        if res.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
