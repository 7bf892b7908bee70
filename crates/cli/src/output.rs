// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use ckb_core::{
    encode_component, routes, Breadcrumb, BreadcrumbEntry, CacheMetadata, LinkTarget, StepPosition,
};
use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format-branch helper: pretty JSON, or the text renderer.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

/// The site path a target points at, or `None` for plain-text entries.
///
/// Unknown routes fall back to their `name?query` form.
pub fn href(target: &LinkTarget) -> Option<String> {
    let LinkTarget::Route { name, .. } = target else {
        return None;
    };
    let path = match name.as_str() {
        routes::FRONT => "/".to_string(),
        routes::CART => "/cart".to_string(),
        routes::CHECKOUT_FORM => {
            let order = target.param("order").unwrap_or_default();
            let mut path = format!("/checkout/{}", encode_component(order));
            if let Some(step) = target.param("step") {
                path.push('/');
                path.push_str(&encode_component(step));
            }
            path
        }
        _ => target.to_string(),
    };
    Some(path)
}

/// JSON shape of one trail entry.
#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub label: &'a str,
    pub target: &'a LinkTarget,
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<StepPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl<'a> From<&'a BreadcrumbEntry> for EntryView<'a> {
    fn from(entry: &'a BreadcrumbEntry) -> Self {
        Self {
            label: &entry.label,
            target: &entry.target,
            href: href(&entry.target),
            position: entry.position,
            class: entry.css_class(),
        }
    }
}

/// JSON shape of a built trail.
#[derive(Debug, Serialize)]
pub struct TrailView<'a> {
    pub entries: Vec<EntryView<'a>>,
    pub cache: &'a CacheMetadata,
}

impl<'a> From<&'a Breadcrumb> for TrailView<'a> {
    fn from(breadcrumb: &'a Breadcrumb) -> Self {
        Self { entries: breadcrumb.entries.iter().map(EntryView::from).collect(), cache: &breadcrumb.cache }
    }
}

/// One text line: marker, label, then the href and class when present.
///
/// ```text
///   Order information  /checkout/7/order_information  [breadcrumb-checkout-item-previous]
/// * Review  [breadcrumb-checkout-item-current]
/// ```
pub fn format_entry(entry: &BreadcrumbEntry) -> String {
    let current = entry.position.is_some_and(StepPosition::is_current);
    let mut line = if current {
        format!("* {}", crate::color::header(&entry.label))
    } else {
        format!("  {}", entry.label)
    };
    if let Some(path) = href(&entry.target) {
        line.push_str("  ");
        line.push_str(&crate::color::context(&path));
    }
    if let Some(class) = entry.css_class() {
        line.push_str("  ");
        line.push_str(&crate::color::muted(&format!("[{}]", class)));
    }
    line
}

/// Render a list as text or JSON. Handles the empty case for text.
pub fn handle_list<T: Serialize>(
    format: OutputFormat,
    items: &[T],
    empty_msg: &str,
    render_text: impl FnOnce(&[T], &mut dyn Write),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
        OutputFormat::Text => {
            if items.is_empty() {
                println!("{}", empty_msg);
            } else {
                render_text(items, &mut std::io::stdout());
            }
        }
    }
    Ok(())
}
