// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phare runs the linters a project is set up for.
//!
//! Each linter is a [`checks::Tool`] wrapped in a [`check::Check`], which
//! decides whether the tool can and should run, runs it, and records the
//! tool's exit status. The [`runner::Runner`] drives a list of checks in order
//! and stops at the first failure.

pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod git;
pub mod output;
pub mod probe;
pub mod runner;

pub use error::{Error, Result};

#[cfg(test)]
pub mod test_utils;
