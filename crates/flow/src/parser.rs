// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flow file parsing (TOML, HCL, JSON) and load-time validation.

use crate::catalog::FlowCatalog;
use crate::flow::{FlowConfig, FlowDef};
use ckb_core::StepDefinition;
use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use thiserror::Error;

/// Flow file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Hcl,
    Json,
}

/// Pick the format from a file extension.
pub fn format_for_path(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Some(Format::Toml),
        Some("hcl") => Some(Format::Hcl),
        Some("json") => Some(Format::Json),
        _ => None,
    }
}

/// Errors from parsing or validating a flow file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid format in {location}: {message}")]
    InvalidFormat { location: String, message: String },
}

impl ParseError {
    fn invalid(location: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::InvalidFormat { location: location.into(), message: message.into() }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FlowFile {
    #[serde(default, deserialize_with = "unique_keys")]
    flow: IndexMap<String, RawFlow>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFlow {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    default: bool,
    #[serde(default)]
    config: FlowConfig,
    #[serde(default)]
    step: RawSteps,
}

/// Steps as an array of tables (`[[flow.x.step]]` with `id`) or as a map
/// keyed by id (HCL `step "id" { ... }` blocks).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSteps {
    List(Vec<RawListStep>),
    Map(#[serde(deserialize_with = "unique_keys")] IndexMap<String, RawStep>),
}

impl Default for RawSteps {
    fn default() -> Self {
        RawSteps::List(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawListStep {
    id: String,
    label: String,
    #[serde(default)]
    hidden: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    label: String,
    #[serde(default)]
    hidden: bool,
}

/// Deserialize a map in document order, rejecting repeated keys.
///
/// JSON objects may repeat a key; a plain `IndexMap` would keep the last.
fn unique_keys<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueKeys<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeys<V> {
        type Value = IndexMap<String, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map with unique keys")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                if map.contains_key(&key) {
                    return Err(de::Error::custom(format_args!("duplicate key '{}'", key)));
                }
                map.insert(key, value);
            }
            Ok(map)
        }
    }

    deserializer.deserialize_map(UniqueKeys(PhantomData))
}

impl RawSteps {
    fn into_steps(self) -> Vec<(String, RawStep)> {
        match self {
            RawSteps::List(list) => list
                .into_iter()
                .map(|s| (s.id, RawStep { label: s.label, hidden: s.hidden }))
                .collect(),
            RawSteps::Map(map) => map.into_iter().collect(),
        }
    }
}

/// Parse TOML flow definitions.
pub fn parse_flows(content: &str) -> Result<FlowCatalog, ParseError> {
    parse_flows_with_format(content, Format::Toml)
}

/// Parse flow definitions in the given format and validate them.
pub fn parse_flows_with_format(content: &str, format: Format) -> Result<FlowCatalog, ParseError> {
    let file: FlowFile = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };

    let mut catalog = FlowCatalog::new();
    let mut default_flow: Option<String> = None;
    for (name, raw) in file.flow {
        let location = format!("flow.{}", name);
        validate_id(&name, &location)?;
        if raw.default {
            if let Some(first) = &default_flow {
                return Err(ParseError::invalid(
                    format!("{}.default", location),
                    format!("flow '{}' is already the default", first),
                ));
            }
            default_flow = Some(name.clone());
        }
        let flow = build_flow(name, raw, &location)?;
        catalog.insert(flow);
    }
    Ok(catalog)
}

fn build_flow(name: String, raw: RawFlow, location: &str) -> Result<FlowDef, ParseError> {
    let steps = raw.step.into_steps();
    if steps.is_empty() {
        return Err(ParseError::invalid(location, "flow must define at least one step"));
    }

    let mut seen = HashSet::new();
    let mut defs = Vec::with_capacity(steps.len());
    for (id, step) in steps {
        let step_location = format!("{}.step.{}", location, id);
        validate_id(&id, &step_location)?;
        if !seen.insert(id.clone()) {
            return Err(ParseError::invalid(step_location, format!("duplicate step '{}'", id)));
        }
        if step.label.trim().is_empty() {
            return Err(ParseError::invalid(
                format!("{}.label", step_location),
                "label must not be empty",
            ));
        }
        defs.push(StepDefinition { id: id.into(), label: step.label, hidden: step.hidden });
    }

    let label = raw.label.unwrap_or_else(|| name.clone());
    Ok(FlowDef::new(name)
        .with_label(label)
        .with_default(raw.default)
        .with_breadcrumb_links(raw.config.display_progress_breadcrumb_links)
        .with_steps(defs))
}

/// Flow and step ids appear in URLs: lowercase ASCII, digits, `_` and `-`.
fn validate_id(id: &str, location: &str) -> Result<(), ParseError> {
    if id.is_empty() {
        return Err(ParseError::invalid(location, "id must not be empty"));
    }
    if let Some(c) =
        id.chars().find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-'))
    {
        return Err(ParseError::invalid(
            location,
            format!("id '{}' contains invalid character '{}'", id, c),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
