use log::{debug, info};
use ndarray::ArrayView2;

use crate::db::{Database, crud};
use crate::error::{IndexError, Result};
use crate::histogram::WordHistogram;
use crate::vocabulary::Vocabulary;

/// Write path of the engine: projects an image's descriptors through the
/// vocabulary and persists its postings plus word histogram.
///
/// Indexing is idempotent per filename. The image record, all postings and
/// the histogram are written in one transaction per image, so a reader never
/// observes postings without their histogram or vice versa.
pub struct Indexer<V> {
    db: Database,
    voc: V,
}

impl<V: Vocabulary> Indexer<V> {
    pub fn new(db: Database, voc: V) -> Self {
        Self { db, voc }
    }

    /// Check whether an image filename has been indexed.
    pub async fn is_indexed(&self, filename: &str) -> Result<bool> {
        Ok(crud::find_image_id(&self.db, filename).await?.is_some())
    }

    /// Return the image id for a filename, registering it if unseen.
    ///
    /// The unique filename index arbitrates concurrent creation; the loser
    /// of the race re-reads the now-existing id once.
    pub async fn get_or_create_image_id(&self, filename: &str) -> Result<i64> {
        if let Some(id) = crud::find_image_id(&self.db, filename).await? {
            return Ok(id);
        }

        match crud::insert_image(&self.db, filename).await {
            Ok(id) => Ok(id),
            Err(e) if is_unique_violation(&e) => {
                crud::find_image_id(&self.db, filename).await?.ok_or_else(|| {
                    IndexError::ConcurrentIndexConflict { filename: filename.to_string() }
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Project an image's descriptors and add it to the index.
    ///
    /// Returns `false` without touching the store when the filename is
    /// already indexed, regardless of whether the descriptors differ from
    /// the earlier call. A projection failure leaves the store untouched.
    pub async fn add_to_index(
        &self,
        filename: &str,
        descriptors: ArrayView2<'_, f32>,
    ) -> Result<bool> {
        if self.is_indexed(filename).await? {
            debug!("already indexed: {}", filename);
            return Ok(false);
        }
        info!("indexing {}", filename);

        match self.index_image(filename, descriptors).await {
            Ok(()) => Ok(true),
            Err(IndexError::Database(e)) if is_unique_violation(&e) => {
                // another writer registered this filename first
                match self.is_indexed(filename).await? {
                    true => Ok(false),
                    false => Err(IndexError::ConcurrentIndexConflict {
                        filename: filename.to_string(),
                    }),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// One indexing operation as one durable unit: register the image,
    /// write its postings and histogram, commit.
    ///
    /// The image insert is the first statement of the transaction, so the
    /// transaction starts as a writer and concurrent adds serialize on the
    /// write lock instead of failing a read-to-write upgrade.
    async fn index_image(&self, filename: &str, descriptors: ArrayView2<'_, f32>) -> Result<()> {
        let words = self.voc.project(descriptors)?;

        let mut tx = self.db.begin().await?;

        let image_id = crud::insert_image(&mut *tx, filename).await?;
        for &word in &words {
            crud::insert_posting(&mut *tx, image_id, word, self.voc.name()).await?;
        }

        let histogram = WordHistogram::from_words(words);
        crud::insert_histogram(&mut *tx, image_id, &histogram.to_bytes()?, self.voc.name())
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
