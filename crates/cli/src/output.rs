// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented text output.
//!
//! Everything phare prints itself goes through here. The linters write to
//! the inherited stdout directly.

use std::io::Write;

use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;

/// Width of the rules drawn around banners.
const RULE_WIDTH: usize = 60;

/// Message printed when every check passed or was skipped.
pub const SUMMARY_PASS: &str = "Everything looks good, keep on committing!";

/// Message printed when a check failed.
pub const SUMMARY_FAIL: &str = "Something is wrong, stopping commit process.";

fn rule(out: &mut dyn WriteColor) -> std::io::Result<()> {
    out.set_color(&scheme::rule())?;
    write!(out, "{}", "-".repeat(RULE_WIDTH))?;
    out.reset()?;
    writeln!(out)
}

fn colored_line(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)
}

/// Program header, printed once before any check.
pub fn header(out: &mut dyn WriteColor, version: &str, directory: &str) -> std::io::Result<()> {
    colored_line(out, &scheme::check_name(), &format!("Phare v{}", version))?;
    writeln!(out, "Checking {} for code style errors", directory)?;
    writeln!(out)
}

/// Banner identifying a check that is about to run.
pub fn banner(out: &mut dyn WriteColor, title: &str) -> std::io::Result<()> {
    rule(out)?;
    colored_line(out, &scheme::check_name(), &format!("Running {} to check for errors…", title))?;
    rule(out)?;
    out.flush()
}

/// The single result line of a check that ran.
pub fn outcome(out: &mut dyn WriteColor, status: i32, message: &str) -> std::io::Result<()> {
    let spec = if status == 0 { scheme::pass() } else { scheme::fail() };
    colored_line(out, &spec, message)?;
    writeln!(out)
}

/// Final line for the whole run.
pub fn summary(out: &mut dyn WriteColor, status: i32) -> std::io::Result<()> {
    if status == 0 {
        colored_line(out, &scheme::pass(), SUMMARY_PASS)
    } else {
        colored_line(out, &scheme::fail(), SUMMARY_FAIL)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
