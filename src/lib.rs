pub mod cli;
pub mod config;
pub mod db;
mod error;
mod histogram;
mod indexer;
mod searcher;
mod vocabulary;

pub use error::{IndexError, Result};
pub use histogram::WordHistogram;
pub use indexer::Indexer;
pub use searcher::Searcher;
pub use vocabulary::{CentroidVocabulary, Vocabulary};
