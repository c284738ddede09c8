// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

use phare::check::CheckContext;
use phare::cli::Cli;
use phare::color::resolve_color;
use phare::config;
use phare::git::{GitTree, is_git_repo};
use phare::output;
use phare::probe::SystemProbe;
use phare::runner::Runner;

/// Exit code for configuration and environment errors.
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("phare: {:#}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Log to stderr, filtered by `PHARE_LOG` (e.g. `PHARE_LOG=debug`).
fn init_logging(verbose: bool) {
    let default = if verbose { "phare=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("PHARE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let mut config = config::load_or_default(cli.config.as_deref(), &cwd)?;
    cli.apply(&mut config);

    if config.diff && !is_git_repo(config.directory()) {
        anyhow::bail!(
            "diff mode needs a git repository, and {} is not in one",
            config.directory().display()
        );
    }

    let probe = SystemProbe;
    // Linters run in the working directory, so changed paths are given
    // relative to it.
    let tree = GitTree::new(config.directory()).relative_to(&cwd);
    let mut runner = Runner::from_config(&config, CheckContext { probe: &probe, tree: &tree })?;

    let mut out = StandardStream::stdout(resolve_color(cli.color, cli.no_color));
    let directory = config.directory().display().to_string();
    output::header(&mut out, env!("CARGO_PKG_VERSION"), &directory)?;

    let status = runner.run(&mut out).context("check run failed")?;

    output::summary(&mut out, status)?;
    out.flush()?;
    Ok(status)
}
