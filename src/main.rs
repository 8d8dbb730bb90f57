use clap::Parser;
use imindex::cli::SubCommandExtend;
use imindex::config::{Opts, SubCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts = Opts::parse();
    match &opts.subcmd {
        SubCommand::Init(cmd) => cmd.run(&opts).await,
        SubCommand::Add(cmd) => cmd.run(&opts).await,
        SubCommand::Search(cmd) => cmd.run(&opts).await,
        SubCommand::SearchWord(cmd) => cmd.run(&opts).await,
    }
}
