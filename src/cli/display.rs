// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the probe explorer.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `PROBE_THEME` first, then `COLORFGBG`, then macOS system appearance, then
//! defaults to dark. Colors are only emitted when stdout is a TTY and
//! `NO_COLOR` is unset, so piped output is plain text.
//!
//! Everything writes to a caller-supplied `io::Write`. The plain result
//! lines are never styled: they must stay byte-identical to what the
//! standalone programs print.
//!
//! # Theme detection order
//!
//! 1. `PROBE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use probe::report::Comparison;
use probe::{Direction, Procedure, Report, Scenario, Step, NOT_FOUND};
use std::io::{self, Write};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Background from a `COLORFGBG` value ("fg;bg"). 7 and up is light, except 8.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        None
    }
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("PROBE_THEME").ok().as_deref().and_then(parse_theme) {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
    {
        return theme;
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Content line: │ content          │
pub fn row<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let b = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    writeln!(out, "{b}│{r}{content}{}{b}│{r}", " ".repeat(pad), r = reset())
}

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    let b = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    writeln!(
        out,
        "{b}┌{r}{label_part}{b}{}┐{r}",
        "─".repeat(remaining),
        r = reset()
    )
}

/// Section footer: └──────────────────┘
pub fn section_bot<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset())
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Prefix for fatal messages on stderr
pub fn error_prefix() -> String {
    if std::env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stderr) {
        format!("{}{}error:{}", BOLD, RED(), RESET)
    } else {
        "error:".to_string()
    }
}

/// Procedure name, colored per procedure
pub fn procedure_label(procedure: Procedure) -> String {
    match procedure {
        Procedure::Linear => themed(BLUE, &[BOLD], "linear"),
        Procedure::Binary => themed(YELLOW, &[BOLD], "binary"),
    }
}

/// Reported positions: green when found, red `-1` otherwise
pub fn positions_label(report: &Report) -> String {
    if report.found {
        themed(GREEN, &[BOLD], &report.lines().join(","))
    } else {
        themed(RED, &[], &NOT_FOUND.to_string())
    }
}

/// Sequence preview, elided past a dozen elements
pub fn sequence_label(seq: &[i32]) -> String {
    const SHOWN: usize = 12;
    let mut parts: Vec<String> = seq.iter().take(SHOWN).map(ToString::to_string).collect();
    if seq.len() > SHOWN {
        parts.push("…".to_string());
    }
    format!("[{}]", parts.join(", "))
}

/// One narrated step with a colored verdict marker
pub fn step_line(n: usize, step: &Step) -> String {
    let marker = match *step {
        Step::Scan { matched: true, .. }
        | Step::Halve {
            direction: Direction::Found,
            ..
        } => themed(GREEN, &[BOLD], "✓"),
        Step::Scan { matched: false, .. } => themed(GRAY, &[], "·"),
        Step::Halve {
            direction: Direction::Right,
            ..
        } => themed(BLUE, &[], "→"),
        Step::Halve {
            direction: Direction::Left,
            ..
        } => themed(BLUE, &[], "←"),
    };
    format!(" {:>3}. {} {}", n, marker, step.describe())
}

// ═══════════════════════════════════════════════════════════════════════════
// SCREENS
// ═══════════════════════════════════════════════════════════════════════════

/// Boxed step-by-step narration of one run.
pub fn print_explanation<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    report: &Report,
) -> io::Result<()> {
    let label = format!("{} search · {}", report.procedure, scenario.name);
    section_top(out, &label)?;
    row(out, &format!(" sequence  {}", sequence_label(scenario.sequence)))?;
    row(out, &format!(" target    {}", scenario.target))?;
    row(out, "")?;
    if report.steps.is_empty() {
        row(out, &themed(GRAY, &[DIM], "   nothing to inspect"))?;
    }
    for (i, step) in report.steps.iter().enumerate() {
        row(out, &step_line(i + 1, step))?;
    }
    row(out, "")?;
    row(
        out,
        &format!(
            " result    {}   comparisons {}",
            positions_label(report),
            report.comparisons
        ),
    )?;
    section_bot(out)
}

/// Side-by-side table of both procedures on every scenario.
pub fn print_comparison_table<W: Write>(out: &mut W, rows: &[Comparison]) -> io::Result<()> {
    section_top(out, "scenarios")?;
    row(
        out,
        &themed(
            GRAY,
            &[],
            " scenario     target  linear       cmp   binary       cmp",
        ),
    )?;
    for c in rows {
        let binary = match &c.binary {
            Some(report) => format!(
                "{} {}",
                pad_right(&positions_label(report), 12),
                pad_right(&report.comparisons.to_string(), 5)
            ),
            None => themed(GRAY, &[DIM], "n/a (unsorted)"),
        };
        row(
            out,
            &format!(
                " {} {} {} {} {}",
                pad_right(c.scenario.name, 12),
                pad_right(&c.scenario.target.to_string(), 7),
                pad_right(&positions_label(&c.linear), 12),
                pad_right(&c.linear.comparisons.to_string(), 5),
                binary
            ),
        )?;
    }
    section_bot(out)?;
    writeln!(
        out,
        "{}",
        themed(
            GRAY,
            &[DIM],
            &format!(
                "{} reports every match; {} reports one.",
                procedure_label(Procedure::Linear),
                procedure_label(Procedure::Binary)
            )
        )
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
