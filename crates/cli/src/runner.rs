// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential check runner.
//!
//! Runs checks one after the other in canonical order and stops at the
//! first check that reports a nonzero status.

use termcolor::WriteColor;

use crate::check::{Check, CheckContext};
use crate::checks;
use crate::config::Config;
use crate::error::Result;

/// The check runner executes checks in order.
pub struct Runner<'a> {
    checks: Vec<Check<'a>>,
}

impl<'a> Runner<'a> {
    pub fn new(checks: Vec<Check<'a>>) -> Self {
        Self { checks }
    }

    /// Build the checks selected by `config`.
    pub fn from_config(config: &Config, ctx: CheckContext<'a>) -> Result<Self> {
        let tools = checks::select(&config.skip, &config.only)?;
        let checks = tools
            .into_iter()
            .map(|tool| {
                let options = config.check(tool.name()).options(config.diff);
                Check::new(tool, config.directory(), &options, ctx)
            })
            .collect();
        Ok(Self::new(checks))
    }

    pub fn checks(&self) -> &[Check<'a>] {
        &self.checks
    }

    /// Run all checks and return the aggregate status.
    ///
    /// The first nonzero status stops the run and becomes the aggregate
    /// status. Checks after it are left unrun.
    pub fn run(&mut self, out: &mut dyn WriteColor) -> Result<i32> {
        for check in &mut self.checks {
            let status = check.run(out)?;
            if status != 0 {
                tracing::debug!("{} failed with status {}, stopping", check.name(), status);
                return Ok(status);
            }
        }
        Ok(0)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
