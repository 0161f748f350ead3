//! Repository for interview notes.

use chrono::{DateTime, Utc};
use interview_tracker_core::NoteId;
use interview_tracker_tracking::{Note, Rating};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::str::FromStr;

use super::decode_error;

/// Row type for note queries.
#[derive(FromRow)]
struct NoteRow {
    id: String,
    user_id: String,
    interview_id: String,
    content: String,
    rating: String,
    created_at: DateTime<Utc>,
}

impl NoteRow {
    fn try_into_note(self) -> Result<Note, sqlx::Error> {
        let id = NoteId::from_str(&self.id)
            .map_err(|e| decode_error(format!("invalid note id '{}': {}", self.id, e)))?;
        let rating = Rating::from_str(&self.rating).map_err(|e| decode_error(e.to_string()))?;

        Ok(Note {
            id,
            user_id: self.user_id,
            interview_id: self.interview_id,
            content: self.content,
            rating,
            created_at: self.created_at,
        })
    }
}

/// Repository for note operations.
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Creates a new note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds the user's note on an interview.
    pub async fn find(
        &self,
        user_id: &str,
        interview_id: &str,
    ) -> Result<Option<Note>, sqlx::Error> {
        let row: Option<NoteRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, interview_id, content, rating, created_at
            FROM notes
            WHERE user_id = $1 AND interview_id = $2
            "#,
        )
        .bind(user_id)
        .bind(interview_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(NoteRow::try_into_note).transpose()
    }

    /// Inserts the note, or replaces the content and rating of the existing
    /// note for the same interview. Returns the stored note.
    pub async fn upsert(&self, note: &Note) -> Result<Note, sqlx::Error> {
        let row: NoteRow = sqlx::query_as(
            r#"
            INSERT INTO notes (id, user_id, interview_id, content, rating, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, interview_id)
            DO UPDATE SET content = EXCLUDED.content, rating = EXCLUDED.rating
            RETURNING id, user_id, interview_id, content, rating, created_at
            "#,
        )
        .bind(note.id.to_string())
        .bind(&note.user_id)
        .bind(&note.interview_id)
        .bind(&note.content)
        .bind(note.rating.as_str())
        .bind(note.created_at)
        .fetch_one(&self.pool)
        .await?;

        row.try_into_note()
    }

    /// Returns the ratings the user gave, keyed by interview id.
    pub async fn ratings_for(
        &self,
        user_id: &str,
        interview_ids: &[String],
    ) -> Result<HashMap<String, Rating>, sqlx::Error> {
        if interview_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT interview_id, rating
            FROM notes
            WHERE user_id = $1 AND interview_id = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(interview_ids)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(interview_id, rating)| {
                Rating::from_str(&rating)
                    .map(|rating| (interview_id, rating))
                    .map_err(|e| decode_error(e.to_string()))
            })
            .collect()
    }
}
