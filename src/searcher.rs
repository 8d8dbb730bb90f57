use std::cmp::Reverse;
use std::collections::HashMap;

use log::debug;

use crate::db::{Database, crud};
use crate::error::Result;
use crate::histogram::WordHistogram;

/// Read path of the engine, bound to one vocabulary name.
///
/// Candidates are ranked by the number of distinct query words an image
/// shares with the query. Ties are broken by ascending image id, so
/// repeated runs return identical rankings.
pub struct Searcher {
    db: Database,
    vocabulary: String,
}

impl Searcher {
    pub fn new(db: Database, vocabulary: impl Into<String>) -> Self {
        Self { db, vocabulary: vocabulary.into() }
    }

    /// Distinct images containing a word, in unspecified order.
    ///
    /// A word the index has never seen yields an empty set.
    pub async fn candidates_from_word(&self, word_id: i64) -> Result<Vec<i64>> {
        Ok(crud::images_with_word(&self.db, word_id, &self.vocabulary).await?)
    }

    /// Rank all candidate images for a query histogram, best match first.
    ///
    /// An empty query yields an empty ranking.
    pub async fn candidates_from_histogram(&self, query: &WordHistogram) -> Result<Vec<i64>> {
        let active = query.active_words();

        let mut shared: HashMap<i64, usize> = HashMap::new();
        for &word in &active {
            for image_id in self.candidates_from_word(word).await? {
                *shared.entry(image_id).or_insert(0) += 1;
            }
        }
        debug!("{} candidate images across {} active words", shared.len(), active.len());

        let mut ranked: Vec<_> = shared.into_iter().collect();
        ranked.sort_unstable_by_key(|&(image_id, count)| (Reverse(count), image_id));

        Ok(ranked.into_iter().map(|(image_id, _)| image_id).collect())
    }

    /// Stored histogram of an image under this searcher's vocabulary.
    pub async fn histogram(&self, image_id: i64) -> Result<Option<WordHistogram>> {
        match crud::find_histogram(&self.db, image_id, &self.vocabulary).await? {
            Some(record) => Ok(Some(WordHistogram::from_bytes(&record.histogram)?)),
            None => Ok(None),
        }
    }

    /// Resolve an image id back to its filename.
    pub async fn filename(&self, image_id: i64) -> Result<Option<String>> {
        Ok(crud::get_image(&self.db, image_id).await?.map(|image| image.filename))
    }
}
