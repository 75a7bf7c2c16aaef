mod args;

use std::error::Error;
use std::fs::File;
use std::io;
use std::sync::Arc;

use args::Args;
use book::OpeningBook;
use clap::Parser;
use evaluation::Evaluator;
use log::LevelFilter;
use service::{Connection, GameSession};
use simplelog::{Config, WriteLogger};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let book = if args.no_book {
        OpeningBook::empty()
    } else {
        OpeningBook::load(&args.book)?
    };
    let mut session = GameSession::new(Evaluator::default(), Arc::new(book));

    let stdin = io::stdin();
    let mut connection = Connection::new(stdin.lock(), io::stdout());
    connection.listen(|request| session.handle(request))?;

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    // stdout carries the protocol, so logs only go to a file
    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}
