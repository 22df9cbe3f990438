use crate::error::SimResult;
use crate::sim::Simulation;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::settings::Style;

mod error;
mod event;
mod plane;
mod record;
mod runway;
mod scheduler;
mod sim;
mod time;
mod wait_list;

const TERMINATE_MESSAGE: &str = "Program terminated normally";

#[derive(Parser)]
struct Args {
    /// Path to the request file, one request per line:
    /// <time> <callSign> <flightNumber> <size> <requestType>
    input: PathBuf,

    /// Number of runways the tower controls
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    runways: u32,

    /// Print a per-plane clearance table after the summary
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    if std::env::args().len() <= 1 {
        println!("No arguments have been passed");
        return ExitCode::FAILURE;
    }
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("{}", err.to_string().red());
        return ExitCode::FAILURE;
    }

    println!("{TERMINATE_MESSAGE}");
    ExitCode::SUCCESS
}

fn run(args: &Args) -> SimResult<()> {
    println!("Starting simulation...");

    let file = File::open(&args.input)?;
    let mut sim = Simulation::new(args.runways, BufReader::new(file));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = sim.run(&mut out)?;
    writeln!(out, "{summary}")?;

    if args.stats {
        let mut table = tabled::Table::new(sim.reports());
        table.with(Style::rounded());
        table.with(tabled::settings::Alignment::left());
        writeln!(out, "{table}")?;
    }

    Ok(())
}
