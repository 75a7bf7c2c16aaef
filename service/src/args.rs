use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "Agent Service")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Log requests and responses to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Polyglot opening book shared by the greedy, minimax and scout agents.
    #[arg(long, default_value = "gm2001.bin")]
    pub book: PathBuf,

    /// Play without an opening book.
    #[arg(long, default_value_t = false)]
    pub no_book: bool,
}
