// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use probe::fixtures::{scenario, scenario_names};
use probe::{compare_all, Procedure, ProbeError, Report, Scenario};
use std::io::{self, Write};

mod cli;
use cli::{display, Cli, Commands, RunArgs};

fn main() {
    probe::logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Linear(args) => run_one(Procedure::Linear, &args),
        Commands::Binary(args) => run_one(Procedure::Binary, &args),
        Commands::Scenarios { json } => run_scenarios(json),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "probe failed");
        eprintln!("{} {}", display::error_prefix(), e);
        std::process::exit(1);
    }
}

fn find_scenario(name: &str) -> Result<&'static Scenario, ProbeError> {
    scenario(name).ok_or_else(|| ProbeError::UnknownScenario {
        name: name.to_string(),
        known: scenario_names(),
    })
}

fn run_one(procedure: Procedure, args: &RunArgs) -> Result<(), ProbeError> {
    let scenario = find_scenario(&args.scenario)?;
    let report = Report::run(scenario, procedure)?;
    tracing::info!(
        scenario = scenario.name,
        %procedure,
        comparisons = report.comparisons,
        "search finished"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let report = if args.explain {
            report
        } else {
            report.without_steps()
        };
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        if args.explain {
            display::print_explanation(&mut out, scenario, &report)?;
        }
        report.write_lines(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn run_scenarios(json: bool) -> Result<(), ProbeError> {
    let rows = compare_all()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    } else {
        display::print_comparison_table(&mut out, &rows)?;
    }
    out.flush()?;
    Ok(())
}
