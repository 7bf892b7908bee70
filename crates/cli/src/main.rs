// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ckb`: inspect checkout flows and preview their progress breadcrumbs.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod color;
mod commands;
mod env;
mod exit_error;
mod output;
mod table;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{flow, trail};
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "ckb",
    version,
    about = "Checkout progress breadcrumbs",
    styles = color::styles()
)]
struct Cli {
    /// Flow file directory [default: $CKB_FLOWS_DIR or .ckb/flows]
    #[arg(long, global = true, value_name = "DIR")]
    flows: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect configured checkout flows
    Flow(flow::FlowArgs),
    /// Build the breadcrumb trail for an order
    Trail(trail::TrailArgs),
}

fn main() {
    init_logging();
    let code = match run() {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("error: {}", exit.message);
                exit.code
            }
            None => {
                eprintln!("error: {:#}", e);
                1
            }
        },
    };
    std::process::exit(code);
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(env::LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let flows_dir = env::flows_dir(cli.flows.as_deref(), &cwd);
    tracing::debug!(dir = %flows_dir.display(), "using flow directory");

    match command {
        Commands::Flow(args) => flow::handle(args.command, &flows_dir, cli.output),
        Commands::Trail(args) => trail::handle(args, &flows_dir, cli.output),
    }
}
