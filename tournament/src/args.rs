use std::path::PathBuf;

use agents::AgentKind;
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "Agent Tournament")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = "0.1.0")]
#[command(about = "Plays two agents against each other and reports the results")]
pub struct Args {
    /// Agent playing White: random, greedy, minimax or scout
    #[arg(long)]
    pub p1: AgentKind,

    /// Agent playing Black: random, greedy, minimax or scout
    #[arg(long)]
    pub p2: AgentKind,

    /// Number of games to play
    #[arg(long)]
    pub games: usize,

    /// Print the board after every ply
    #[arg(long, default_value_t = false)]
    pub viz: bool,

    /// Search depth for minimax and scout, extended by two in the endgame
    #[arg(long, default_value_t = 3)]
    pub depth: u8,

    /// Polyglot opening book
    #[arg(long, default_value = "gm2001.bin")]
    pub book: PathBuf,

    /// Play without an opening book
    #[arg(long, default_value_t = false)]
    pub no_book: bool,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}
