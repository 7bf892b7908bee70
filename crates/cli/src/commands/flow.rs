// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ckb flow` - inspect configured checkout flows

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use ckb_core::FlowId;
use ckb_flow::{CheckoutFlow, FlowCatalog};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, handle_list, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct FlowArgs {
    #[command(subcommand)]
    pub command: FlowCommand,
}

#[derive(Subcommand)]
pub enum FlowCommand {
    /// List flows with their step count and breadcrumb setting
    List,
    /// Show the steps of a flow in order
    Show {
        /// Flow id
        id: String,
    },
}

pub fn handle(command: FlowCommand, flows_dir: &Path, format: OutputFormat) -> Result<()> {
    let catalog = super::load_catalog(flows_dir)?;
    match command {
        FlowCommand::List => list(&catalog, format),
        FlowCommand::Show { id } => show(&catalog, &id, format),
    }
}

#[derive(Debug, Serialize)]
struct FlowSummary<'a> {
    id: &'a FlowId,
    label: &'a str,
    /// Used for orders that do not name a flow.
    default: bool,
    steps: usize,
    breadcrumb_links: bool,
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn list(catalog: &FlowCatalog, format: OutputFormat) -> Result<()> {
    let default_id = catalog.default_flow().map(|f| &f.id);
    let items: Vec<FlowSummary<'_>> = catalog
        .iter()
        .map(|flow| FlowSummary {
            id: &flow.id,
            label: &flow.label,
            default: Some(&flow.id) == default_id,
            steps: flow.visible_steps().len(),
            breadcrumb_links: flow.configuration().display_progress_breadcrumb_links,
        })
        .collect();

    handle_list(format, &items, "No flows found.", |items, out| {
        let mut table = Table::new(vec![
            Column::left("ID"),
            Column::left("LABEL").with_max(30),
            Column::left("STEPS"),
            Column::left("LINKS"),
            Column::muted("DEFAULT"),
        ]);
        for flow in items {
            table.row(vec![
                flow.id.to_string(),
                flow.label.to_string(),
                flow.steps.to_string(),
                on_off(flow.breadcrumb_links).to_string(),
                if flow.default { "*".to_string() } else { String::new() },
            ]);
        }
        table.render(out);
    })
}

fn show(catalog: &FlowCatalog, id: &str, format: OutputFormat) -> Result<()> {
    let Some(flow) = catalog.get(id) else {
        return Err(ExitError::usage(format!("unknown flow '{}'", id)).into());
    };

    format_or_json(format, flow, || {
        let mut out = std::io::stdout();
        let _ = writeln!(out, "{} ({})", color::header(&flow.label), flow.id);
        let _ = writeln!(
            out,
            "breadcrumb links: {}\n",
            on_off(flow.configuration().display_progress_breadcrumb_links)
        );
        let mut table = Table::new(vec![
            Column::muted("#"),
            Column::left("ID"),
            Column::left("LABEL"),
            Column::left("HIDDEN"),
        ]);
        for (index, step) in flow.visible_steps().values().enumerate() {
            table.row(vec![
                (index + 1).to_string(),
                step.id.to_string(),
                step.label.clone(),
                if step.hidden { "yes".to_string() } else { String::new() },
            ]);
        }
        table.render(&mut out);
    })
}
