use clap::Parser;

use crate::cli::SubCommandExtend;
use crate::config::Opts;
use crate::{Searcher, db};

#[derive(Parser, Debug, Clone)]
pub struct SearchWordCommand {
    /// Vocabulary name used to scope index records
    #[arg(short, long, default_value = "default")]
    pub name: String,
    /// Visual word id
    pub word: i64,
}

impl SubCommandExtend for SearchWordCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        let db = db::open(&opts.db).await?;
        let searcher = Searcher::new(db, &self.name);

        for image_id in searcher.candidates_from_word(self.word).await? {
            let filename = searcher.filename(image_id).await?.unwrap_or_default();
            println!("{}\t{}", image_id, filename);
        }
        Ok(())
    }
}
