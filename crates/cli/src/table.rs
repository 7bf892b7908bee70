// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text column tables for list output.

use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    Plain,
    Muted,
}

/// A column heading with its rendering rules.
#[derive(Debug, Clone)]
pub struct Column {
    title: &'static str,
    paint: Paint,
    max: Option<usize>,
}

impl Column {
    pub fn left(title: &'static str) -> Self {
        Self { title, paint: Paint::Plain, max: None }
    }

    /// A column rendered in the muted color.
    pub fn muted(title: &'static str) -> Self {
        Self { title, paint: Paint::Muted, max: None }
    }

    /// Truncate cells longer than `max` characters.
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    fn fit(&self, cell: &str) -> String {
        match self.max {
            Some(max) if cell.chars().count() > max => {
                let mut cut: String = cell.chars().take(max.saturating_sub(1)).collect();
                cut.push('…');
                cut
            }
            _ => cell.to_string(),
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Add a row; missing cells render empty and extra cells are dropped.
    pub fn row(&mut self, cells: Vec<String>) {
        let row = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| col.fit(cells.get(i).map(String::as_str).unwrap_or("")))
            .collect();
        self.rows.push(row);
    }

    pub fn render(&self, out: &mut dyn Write) {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain([col.title.len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let titles: Vec<&str> = self.columns.iter().map(|c| c.title).collect();
        let _ = writeln!(out, "{}", crate::color::header(&self.line(&titles, &widths)));
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&self.columns)
                .zip(&widths)
                .map(|((cell, col), width)| {
                    let padded = format!("{:<width$}", cell, width = width);
                    match col.paint {
                        Paint::Plain => padded,
                        Paint::Muted => crate::color::muted(&padded),
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join("  ").trim_end());
        }
    }

    fn line(&self, cells: &[&str], widths: &[usize]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        padded.join("  ").trim_end().to_string()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
