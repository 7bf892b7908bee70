// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Looks up display strings in the host's interface language.
pub trait Translator: Send + Sync {
    fn translate(&self, source: &str) -> String;
}

/// Returns source strings unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn translate(&self, source: &str) -> String {
        source.to_string()
    }
}
