use sqlx::FromRow;

/// Image registry row.
#[derive(Debug, Clone, FromRow)]
pub struct ImageRecord {
    /// Surrogate id, assigned on first insertion.
    pub id: i64,
    /// Unique image filename.
    pub filename: String,
}

/// One (image, word) occurrence under one vocabulary.
///
/// Repeated words in an image produce one row each.
#[derive(Debug, Clone, FromRow)]
pub struct PostingRecord {
    pub image_id: i64,
    pub word_id: i64,
    pub vocabulary: String,
}

/// Stored word histogram of one image under one vocabulary.
#[derive(Debug, Clone, FromRow)]
pub struct HistogramRecord {
    pub image_id: i64,
    /// bincode-encoded word-id sequence.
    pub histogram: Vec<u8>,
    pub vocabulary: String,
}
