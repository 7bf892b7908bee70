//! CLI help output specs

use crate::prelude::*;

#[test]
fn ckb_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn ckb_help_lists_commands() {
    cli().args(&["--help"]).passes().stdout_has("flow").stdout_has("trail");
}

#[test]
fn ckb_flow_help_shows_subcommands() {
    cli().args(&["flow", "--help"]).passes().stdout_has("list").stdout_has("show");
}

#[test]
fn ckb_trail_help_shows_flags() {
    cli()
        .args(&["trail", "--help"])
        .passes()
        .stdout_has("--order")
        .stdout_has("--checkout-step")
        .stdout_has("--state");
}

#[test]
fn ckb_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn trail_requires_an_order() {
    cli().args(&["trail"]).fails().code(2).stderr_has("--order");
}
