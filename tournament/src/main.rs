mod args;
mod progress;

use std::error::Error;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use agents::{Agent, AgentConfig};
use args::Args;
use clap::Parser;
use cozy_chess::Color;
use evaluation::Evaluator;
use progress::GamesProgressBar;
use simplelog::{Config, SimpleLogger};
use tournament::{Arena, TerminalViewer, Viewer};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let config = AgentConfig {
        depth: args.depth,
        evaluator: Evaluator::default(),
        book_path: (!args.no_book).then(|| args.book.clone()),
    };
    let book = config.load_book()?;

    let white = Agent::from_kind(args.p1, Color::White, &config, book.clone());
    let black = Agent::from_kind(args.p2, Color::Black, &config, book);

    let stop = Arc::new(AtomicBool::new(false));
    let stop_handler = stop.clone();
    ctrlc::set_handler(move || {
        log::info!("Received SIGINT, stopping...");
        stop_handler.store(true, Ordering::Relaxed);
    })?;

    let mut arena = Arena::new(white, black).with_stop_flag(stop.clone());

    if args.games == 1 {
        println!("Playing 1 game...");
    } else {
        println!("Playing {} games...", args.games);
    }

    let stats = if args.viz {
        let mut progress = GamesProgressBar::hidden();
        let mut viewer = TerminalViewer::new(io::stdout(), stop);
        arena.compare_agents(args.games, &mut progress, Some(&mut viewer as &mut dyn Viewer))?
    } else {
        let mut progress = GamesProgressBar::new(args.games)?;
        let stats = arena.compare_agents(args.games, &mut progress, None)?;
        progress.finish();
        stats
    };

    println!("{}", stats);

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    SimpleLogger::init(args.log_level, Config::default())?;

    Ok(args)
}
