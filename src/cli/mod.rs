mod add;
mod init;
mod search;
mod search_word;

pub use add::*;
pub use init::*;
pub use search::*;
pub use search_word::*;

use crate::config::Opts;

pub trait SubCommandExtend {
    fn run(&self, opts: &Opts) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}
