// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `.phare.yml`.

use crate::prelude::*;

/// > Checks listed under `skip` do not run
#[test]
fn config_skip_is_honoured() {
    let project = Project::empty();
    project.tool("jshint", 1);
    project.file(".jshintrc", "{}\n");
    project.config("skip:\n  - jshint\n");

    project
        .phare()
        .assert()
        .success()
        .stdout(predicates::str::contains("Running JSHint").not());
}

/// > Command-line lists replace the config file's
#[test]
fn cli_only_overrides_config_only() {
    let project = Project::empty();
    project.tool("jshint", 0);
    project.file(".jshintrc", "{}\n");
    project.config("only:\n  - eslint\n");

    project
        .phare()
        .args(["--only", "jshint"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running JSHint"));
}

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let project = Project::empty();
    project.config("verbose: true\n");

    project
        .phare()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > A missing --config file is an error
#[test]
fn missing_explicit_config_fails() {
    let project = Project::empty();

    project
        .phare()
        .args(["--config", "nope.yml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("nope.yml"));
}

/// > PHARE_CONFIG selects the config file
#[test]
fn config_file_from_environment() {
    let project = Project::empty();
    project.tool("jscs", 1);
    project.file(".jscsrc", "{}\n");
    project.file("ci/phare.yml", "skip: [jscs]\n");

    project
        .phare()
        .env("PHARE_CONFIG", "ci/phare.yml")
        .assert()
        .success();
}
