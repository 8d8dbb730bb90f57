use sqlx::{Executor, Result, Sqlite, SqlitePool};

use super::{HistogramRecord, ImageRecord, PostingRecord};

/// Check whether the index schema has been created in this database.
pub async fn schema_exists(executor: &SqlitePool) -> Result<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'images'",
    )
    .fetch_one(executor)
    .await?;

    Ok(count > 0)
}

/// Look up an image id by filename.
pub async fn find_image_id<'c, E>(executor: E, filename: &str) -> Result<Option<i64>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_scalar("SELECT id FROM images WHERE filename = ?")
        .bind(filename)
        .fetch_optional(executor)
        .await
}

/// Insert a new image record and return its assigned id.
///
/// Fails with a unique violation when the filename is already registered.
pub async fn insert_image<'c, E>(executor: E, filename: &str) -> Result<i64>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_scalar("INSERT INTO images (filename) VALUES (?) RETURNING id")
        .bind(filename)
        .fetch_one(executor)
        .await
}

/// Fetch an image record by id.
pub async fn get_image(executor: &SqlitePool, id: i64) -> Result<Option<ImageRecord>> {
    sqlx::query_as("SELECT id, filename FROM images WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Insert one posting row.
pub async fn insert_posting<'c, E>(
    executor: E,
    image_id: i64,
    word_id: i64,
    vocabulary: &str,
) -> Result<()>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query("INSERT INTO postings (image_id, word_id, vocabulary) VALUES (?, ?, ?)")
        .bind(image_id)
        .bind(word_id)
        .bind(vocabulary)
        .execute(executor)
        .await?;

    Ok(())
}

/// All posting rows of one image, duplicates included.
pub async fn postings_for_image(
    executor: &SqlitePool,
    image_id: i64,
) -> Result<Vec<PostingRecord>> {
    sqlx::query_as("SELECT image_id, word_id, vocabulary FROM postings WHERE image_id = ?")
        .bind(image_id)
        .fetch_all(executor)
        .await
}

/// Insert the histogram blob of one image.
pub async fn insert_histogram<'c, E>(
    executor: E,
    image_id: i64,
    histogram: &[u8],
    vocabulary: &str,
) -> Result<()>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query("INSERT INTO histograms (image_id, histogram, vocabulary) VALUES (?, ?, ?)")
        .bind(image_id)
        .bind(histogram)
        .bind(vocabulary)
        .execute(executor)
        .await?;

    Ok(())
}

/// Fetch the stored histogram of one image under one vocabulary.
pub async fn find_histogram(
    executor: &SqlitePool,
    image_id: i64,
    vocabulary: &str,
) -> Result<Option<HistogramRecord>> {
    sqlx::query_as(
        "SELECT image_id, histogram, vocabulary FROM histograms \
         WHERE image_id = ? AND vocabulary = ?",
    )
    .bind(image_id)
    .bind(vocabulary)
    .fetch_optional(executor)
    .await
}

/// Distinct images holding at least one posting for a word.
pub async fn images_with_word(
    executor: &SqlitePool,
    word_id: i64,
    vocabulary: &str,
) -> Result<Vec<i64>> {
    sqlx::query_scalar(
        "SELECT DISTINCT image_id FROM postings WHERE word_id = ? AND vocabulary = ?",
    )
    .bind(word_id)
    .bind(vocabulary)
    .fetch_all(executor)
    .await
}
