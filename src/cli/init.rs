use clap::Parser;

use crate::cli::SubCommandExtend;
use crate::config::Opts;
use crate::db;

#[derive(Parser, Debug, Clone)]
pub struct InitCommand;

impl SubCommandExtend for InitCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        let db = db::open(&opts.db).await?;
        db::create_schema(&db).await?;
        println!("initialized index at {}", opts.db.display());
        Ok(())
    }
}
