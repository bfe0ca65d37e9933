//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::VocabularyId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Vocabulary, VocabularyContent};
use crate::domain::repository::VocabularyRepository;
use crate::domain::value_objects::{Example, Meaning, Term};
use crate::error::VocabResult;

/// PostgreSQL-backed vocabulary repository
#[derive(Clone)]
pub struct PgVocabularyRepository {
    pool: PgPool,
}

impl PgVocabularyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl VocabularyRepository for PgVocabularyRepository {
    async fn create(&self, vocabulary: &Vocabulary) -> VocabResult<VocabularyId> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO vocabularies (
                vocabulary_id,
                term,
                meaning,
                example,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING vocabulary_id
            "#,
        )
        .bind(vocabulary.id.as_uuid())
        .bind(vocabulary.term.as_str())
        .bind(vocabulary.meaning.as_str())
        .bind(vocabulary.example.as_ref().map(Example::as_str))
        .bind(vocabulary.created_at)
        .bind(vocabulary.updated_at)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(vocabulary_id = %id, "Vocabulary row inserted");

        Ok(VocabularyId::from_uuid(id))
    }

    async fn find_all(&self) -> VocabResult<Vec<Vocabulary>> {
        let rows = sqlx::query_as::<_, VocabularyRow>(
            r#"
            SELECT
                vocabulary_id,
                term,
                meaning,
                example,
                created_at,
                updated_at
            FROM vocabularies
            ORDER BY created_at, vocabulary_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(VocabularyRow::into_vocabulary).collect())
    }

    async fn find_by_id(&self, id: &VocabularyId) -> VocabResult<Option<Vocabulary>> {
        let row = sqlx::query_as::<_, VocabularyRow>(
            r#"
            SELECT
                vocabulary_id,
                term,
                meaning,
                example,
                created_at,
                updated_at
            FROM vocabularies
            WHERE vocabulary_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(VocabularyRow::into_vocabulary))
    }

    async fn update(
        &self,
        id: &VocabularyId,
        content: &VocabularyContent,
    ) -> VocabResult<Option<Vocabulary>> {
        let row = sqlx::query_as::<_, VocabularyRow>(
            r#"
            UPDATE vocabularies
            SET
                term = $2,
                meaning = $3,
                example = $4,
                updated_at = $5
            WHERE vocabulary_id = $1
            RETURNING
                vocabulary_id,
                term,
                meaning,
                example,
                created_at,
                updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(content.term.as_str())
        .bind(content.meaning.as_str())
        .bind(content.example.as_ref().map(Example::as_str))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(VocabularyRow::into_vocabulary))
    }

    async fn delete(&self, id: &VocabularyId) -> VocabResult<bool> {
        let deleted = sqlx::query("DELETE FROM vocabularies WHERE vocabulary_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct VocabularyRow {
    vocabulary_id: Uuid,
    term: String,
    meaning: String,
    example: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl VocabularyRow {
    fn into_vocabulary(self) -> Vocabulary {
        Vocabulary {
            id: VocabularyId::from_uuid(self.vocabulary_id),
            term: Term::from_db(self.term),
            meaning: Meaning::from_db(self.meaning),
            example: self.example.map(Example::from_db),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
