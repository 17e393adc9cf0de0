// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run reports for the explorer.
//!
//! A `Report` is what one procedure did on one scenario: the positions it
//! reported, how many comparisons it took and, when asked for, each step.
//! It renders either as the plain result lines (identical to what the
//! standalone programs print) or as JSON.

use crate::error::ProbeError;
use crate::fixtures::{Scenario, SCENARIOS};
use crate::procedure::result_lines;
use crate::search::linear_trace;
use crate::types::{Position, Procedure, Step, Trace};
use crate::verify::Ascending;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub scenario: &'static str,
    pub procedure: Procedure,
    pub target: i32,
    pub len: usize,
    pub found: bool,
    pub positions: Vec<Position>,
    pub comparisons: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

impl Report {
    fn from_trace(scenario: &Scenario, procedure: Procedure, trace: Trace) -> Self {
        Report {
            scenario: scenario.name,
            procedure,
            target: scenario.target,
            len: scenario.sequence.len(),
            found: trace.is_found(),
            comparisons: trace.comparisons(),
            positions: trace.positions,
            steps: trace.steps,
        }
    }

    /// Linear search on `scenario`. Always possible.
    pub fn linear(scenario: &Scenario) -> Self {
        let trace = linear_trace(scenario.sequence, &scenario.target);
        Self::from_trace(scenario, Procedure::Linear, trace)
    }

    /// Binary search on `scenario`, refused unless the sequence is ascending.
    pub fn binary(scenario: &Scenario) -> Result<Self, ProbeError> {
        let sorted = Ascending::new(scenario.sequence).map_err(|source| ProbeError::Unsorted {
            scenario: scenario.name,
            source,
        })?;
        let trace = sorted.trace(&scenario.target);
        Ok(Self::from_trace(scenario, Procedure::Binary, trace))
    }

    /// Run `procedure` on `scenario`.
    pub fn run(scenario: &Scenario, procedure: Procedure) -> Result<Self, ProbeError> {
        match procedure {
            Procedure::Linear => Ok(Self::linear(scenario)),
            Procedure::Binary => Self::binary(scenario),
        }
    }

    /// Drop the per-step record (comparisons are kept).
    pub fn without_steps(mut self) -> Self {
        self.steps.clear();
        self
    }

    /// Result lines exactly as the standalone programs print them.
    pub fn lines(&self) -> Vec<String> {
        result_lines(&self.positions)
    }

    pub fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ProbeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Both procedures side by side on one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub scenario: Scenario,
    pub linear: Report,
    /// `None` when the scenario is not ascending.
    pub binary: Option<Report>,
}

impl Comparison {
    /// Run both procedures on `scenario`, skipping binary search on
    /// unsorted input.
    pub fn run(scenario: &Scenario) -> Result<Self, ProbeError> {
        let binary = if scenario.supports(Procedure::Binary) {
            Some(Report::binary(scenario)?.without_steps())
        } else {
            None
        };
        Ok(Comparison {
            scenario: *scenario,
            linear: Report::linear(scenario).without_steps(),
            binary,
        })
    }
}

/// Compare both procedures on every compiled-in scenario.
pub fn compare_all() -> Result<Vec<Comparison>, ProbeError> {
    SCENARIOS.iter().map(Comparison::run).collect()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
