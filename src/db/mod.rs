use std::path::Path;

use log::{debug, info};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};

use crate::error::{IndexError, Result};

pub mod crud;
pub mod model;

pub use model::*;

pub type Database = SqlitePool;

/// Open the index database, creating the file if missing.
///
/// Each indexer or searcher instance owns its own pool; dropping the pool
/// closes the connections.
pub async fn open(filename: impl AsRef<Path>) -> Result<Database> {
    let filename = filename.as_ref();
    debug!("opening index database: {}", filename.display());

    let options = SqliteConnectOptions::new()
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .filename(filename)
        .create_if_missing(true);

    SqlitePool::connect_with(options).await.map_err(IndexError::StorageUnavailable)
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE images (
        id       INTEGER PRIMARY KEY,
        filename TEXT NOT NULL
    )",
    "CREATE TABLE postings (
        image_id   INTEGER NOT NULL,
        word_id    INTEGER NOT NULL,
        vocabulary TEXT NOT NULL
    )",
    "CREATE TABLE histograms (
        image_id   INTEGER NOT NULL,
        histogram  BLOB NOT NULL,
        vocabulary TEXT NOT NULL
    )",
    // the unique filename index arbitrates concurrent get-or-create races
    "CREATE UNIQUE INDEX images_filename_idx ON images (filename)",
    "CREATE INDEX postings_word_idx ON postings (word_id)",
    "CREATE INDEX postings_image_idx ON postings (image_id)",
    "CREATE INDEX histograms_image_idx ON histograms (image_id)",
];

/// One-time schema setup: three tables and their four indexes, committed as
/// one transaction. Fails if the store is already initialized.
pub async fn create_schema(db: &Database) -> Result<()> {
    if crud::schema_exists(db).await? {
        return Err(IndexError::SchemaAlreadyExists);
    }

    info!("creating index schema");
    let mut tx = db.begin().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(())
}
