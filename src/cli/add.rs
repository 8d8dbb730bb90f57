use std::path::PathBuf;

use clap::Parser;
use log::warn;
use ndarray::Array2;
use ndarray_npy::read_npy;
use walkdir::WalkDir;

use crate::cli::SubCommandExtend;
use crate::config::Opts;
use crate::vocabulary::CentroidVocabulary;
use crate::{Indexer, db};

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// Vocabulary centroid matrix in .npy format, one centroid per row
    #[arg(short, long)]
    pub vocabulary: PathBuf,
    /// Vocabulary name used to scope index records
    #[arg(short, long, default_value = "default")]
    pub name: String,
    /// Directory scanned for per-image descriptor files (.npy)
    pub path: PathBuf,
}

impl SubCommandExtend for AddCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        let centroids: Array2<f32> = read_npy(&self.vocabulary)?;
        let voc = CentroidVocabulary::new(&self.name, centroids);

        let db = db::open(&opts.db).await?;
        let indexer = Indexer::new(db, voc);

        let mut added = 0;
        let mut skipped = 0;
        for entry in WalkDir::new(&self.path).into_iter().filter_map(|entry| entry.ok()) {
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "npy") {
                continue;
            }

            let filename = path.to_string_lossy();
            let descriptors: Array2<f32> = match read_npy(path) {
                Ok(descriptors) => descriptors,
                Err(e) => {
                    warn!("skipping {}: {}", filename, e);
                    continue;
                }
            };

            match indexer.add_to_index(&filename, descriptors.view()).await? {
                true => added += 1,
                false => skipped += 1,
            }
        }

        println!("added {} images, skipped {}", added, skipped);
        Ok(())
    }
}
