//! Schema for the movies table
//!
//! Idempotent: every statement uses IF NOT EXISTS, so it runs on each startup.

use sqlx::PgPool;

/// Create the movies table and its indexes.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running movie migrations...");

    // gen_random_uuid() is built in from PostgreSQL 13
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            duration INTEGER NOT NULL CHECK (duration > 0),
            ratings DOUBLE PRECISION CHECK (ratings BETWEEN 1 AND 10),
            total_rating BIGINT CHECK (total_rating >= 0),
            release_year INTEGER NOT NULL CHECK (release_year BETWEEN 1888 AND 9999),
            release_date DATE,
            genres TEXT[] NOT NULL CHECK (cardinality(genres) > 0),
            directors TEXT[] NOT NULL DEFAULT '{}',
            actors TEXT[] NOT NULL DEFAULT '{}',
            cover_image TEXT,
            price DOUBLE PRECISION NOT NULL CHECK (price >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT movies_name_key UNIQUE (name)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_movies_created_at ON movies (created_at DESC, id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_movies_genres ON movies USING GIN (genres)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_movies_release_year ON movies (release_year)")
        .execute(pool)
        .await?;

    tracing::info!("Movie migrations complete");
    Ok(())
}
