use crate::sim::{ClearanceReport, Simulation, Summary};
use std::io::Cursor;

pub struct RunOutcome {
    pub log: Vec<String>,
    pub summary: Summary,
    pub reports: Vec<ClearanceReport>,
}

/// Runs a simulation over an in-memory request stream and captures the
/// per-event log, the summary and the clearance reports.
pub fn run_tower(runways: u32, input: &str) -> RunOutcome {
    let mut sim = Simulation::new(runways, Cursor::new(input));
    let mut out = Vec::new();
    let summary = sim.run(&mut out).expect("simulation aborted");
    assert_eq!(summary.wasted_minutes, sim.total_wasted_minutes());
    let log = String::from_utf8(out)
        .expect("log is utf-8")
        .lines()
        .map(str::to_string)
        .collect();
    RunOutcome {
        log,
        summary,
        reports: sim.reports().to_vec(),
    }
}

/// Minute count from a `TIME: <t> -> ...` log line.
pub fn log_time(line: &str) -> u64 {
    line.strip_prefix("TIME: ")
        .and_then(|rest| rest.split(" ->").next())
        .and_then(|t| t.parse().ok())
        .unwrap_or_else(|| panic!("unparseable log line: {line}"))
}
