use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use ndarray::Array2;
use ndarray_npy::read_npy;

use crate::cli::SubCommandExtend;
use crate::config::Opts;
use crate::vocabulary::{CentroidVocabulary, Vocabulary};
use crate::{Searcher, WordHistogram, db};

#[derive(Parser, Debug, Clone)]
pub struct SearchCommand {
    /// Vocabulary centroid matrix in .npy format, one centroid per row
    #[arg(short, long)]
    pub vocabulary: PathBuf,
    /// Vocabulary name used to scope index records
    #[arg(short, long, default_value = "default")]
    pub name: String,
    /// Query descriptor file (.npy)
    pub file: PathBuf,
    /// Number of results to display
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    pub count: usize,
    /// Output format
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,
}

impl SubCommandExtend for SearchCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        let centroids: Array2<f32> = read_npy(&self.vocabulary)?;
        let voc = CentroidVocabulary::new(&self.name, centroids);

        let descriptors: Array2<f32> = read_npy(&self.file)?;
        let query = WordHistogram::from_words(voc.project(descriptors.view())?);

        let db = db::open(&opts.db).await?;
        let searcher = Searcher::new(db, voc.name());

        let mut ranked = searcher.candidates_from_histogram(&query).await?;
        ranked.truncate(self.count);

        let mut result = Vec::with_capacity(ranked.len());
        for image_id in ranked {
            let filename = searcher.filename(image_id).await?.unwrap_or_default();
            result.push((image_id, filename));
        }

        print_result(&result, self)
    }
}

fn print_result(result: &[(i64, String)], opts: &SearchCommand) -> Result<()> {
    match opts.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?)
        }
        OutputFormat::Table => {
            for (id, filename) in result {
                println!("{}\t{}", id, filename);
            }
        }
    }
    Ok(())
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Table,
}
