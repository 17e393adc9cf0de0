// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the probe explorer.
//!
//! Three subcommands: `linear` and `binary` run one procedure on one
//! compiled-in scenario, `scenarios` runs both procedures on all of them.
//! Sequences and targets are never taken from the command line; only the
//! scenario name is.

pub mod display;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "probe",
    about = "Linear and binary search over compiled-in sequences",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a scenario front to back and print every match
    Linear(RunArgs),

    /// Halve an ascending scenario and print one match
    Binary(RunArgs),

    /// Run both procedures on every scenario and compare
    Scenarios {
        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Scenario to search: reference, absent, duplicates, empty, unsorted
    #[arg(short, long, default_value = "reference")]
    pub scenario: String,

    /// Print a JSON report instead of result lines
    #[arg(long)]
    pub json: bool,

    /// Narrate every comparison before the result lines
    ///
    /// With --json, includes the step list in the report.
    #[arg(long)]
    pub explain: bool,
}
