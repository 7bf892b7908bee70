// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::str::FromStr;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::id::{OrderId, StepId};

/// Route names understood by breadcrumb targets.
pub mod routes {
    /// Site front page.
    pub const FRONT: &str = "<front>";
    /// Shopping cart page.
    pub const CART: &str = "cart.page";
    /// Checkout form, parameterized by `order` and `step`.
    pub const CHECKOUT_FORM: &str = "checkout.form";
    /// Placeholder for entries rendered as plain text.
    pub const NOLINK: &str = "<nolink>";
}

/// Bytes escaped in route names, parameter keys and values, and path segments.
const COMPONENT: &AsciiSet =
    &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'%').add(b'&').add(b'+').add(b'/').add(b'=').add(b'?');

/// Percent-encode `value` for use as one query or path component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn decode_component(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// Where a breadcrumb entry points.
///
/// Serializes to/from a string: `"<nolink>"`, `"<front>"`, or
/// `"checkout.form?order=42&step=shipping"`. Names, keys, and values are
/// percent-encoded in that form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// A named route with its parameters, in insertion order.
    Route { name: String, params: Vec<(String, String)> },
    /// Non-navigable placeholder; the entry renders as text.
    NoLink,
}

impl LinkTarget {
    pub fn route(name: impl Into<String>) -> Self {
        LinkTarget::Route { name: name.into(), params: Vec::new() }
    }

    pub fn front() -> Self {
        Self::route(routes::FRONT)
    }

    pub fn cart() -> Self {
        Self::route(routes::CART)
    }

    /// The checkout form for `order` at `step`.
    pub fn checkout_form(order: &OrderId, step: &StepId) -> Self {
        Self::route(routes::CHECKOUT_FORM).with_param("order", order).with_param("step", step)
    }

    /// Append a route parameter. No-op on [`LinkTarget::NoLink`].
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        if let LinkTarget::Route { params, .. } = &mut self {
            params.push((key.into(), value.to_string()));
        }
        self
    }

    pub fn is_link(&self) -> bool {
        matches!(self, LinkTarget::Route { .. })
    }

    /// The route name; `<nolink>` for the placeholder.
    pub fn route_name(&self) -> &str {
        match self {
            LinkTarget::Route { name, .. } => name,
            LinkTarget::NoLink => routes::NOLINK,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        match self {
            LinkTarget::Route { params, .. } => {
                params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
            }
            LinkTarget::NoLink => None,
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkTarget::NoLink => f.write_str(routes::NOLINK),
            LinkTarget::Route { name, params } => {
                write!(f, "{}", utf8_percent_encode(name, COMPONENT))?;
                for (i, (key, value)) in params.iter().enumerate() {
                    let sep = if i == 0 { '?' } else { '&' };
                    write!(
                        f,
                        "{}{}={}",
                        sep,
                        utf8_percent_encode(key, COMPONENT),
                        utf8_percent_encode(value, COMPONENT)
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for LinkTarget {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == routes::NOLINK {
            return Ok(LinkTarget::NoLink);
        }
        let (name, query) = s.split_once('?').unwrap_or((s, ""));
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(k), decode_component(v))
            })
            .collect();
        Ok(LinkTarget::Route { name: decode_component(name), params })
    }
}

impl Serialize for LinkTarget {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LinkTarget {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.parse() {
            Ok(target) => Ok(target),
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
