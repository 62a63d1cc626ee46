#![allow(missing_docs)]

use std::{
    fs::File,
    io::{self, BufReader},
    num::NonZeroUsize,
    path::PathBuf,
};

use chain_table::ChainTable;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use phonebook::Session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with one command per line, commands are read from stdin if omitted.
    script: Option<PathBuf>,
    /// Number of buckets of the contact table.
    #[clap(short = 'b', long, default_value = "10")]
    buckets: NonZeroUsize,
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    phonebook_logger::setup();

    let mut session = Session::new(ChainTable::with_buckets(args.buckets));
    log::info!("contact table with {} buckets", args.buckets);

    let stdout = io::stdout();
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .wrap_err_with(|| format!("failed to open {}", path.display()))?;
            session.run(BufReader::new(file), stdout.lock())?;
        }
        None => {
            session.run(io::stdin().lock(), stdout.lock())?;
        }
    }

    Ok(())
}
