// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use cx_parser::Separator;

// --- Grammar ---

/// Field separator from `CX_SEPARATOR` (`comma-space` or `space`).
///
/// Unset or empty means "use the default"; an unknown value is an error.
pub fn separator() -> anyhow::Result<Option<Separator>> {
    match std::env::var("CX_SEPARATOR").ok().filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<Separator>()
            .map(Some)
            .map_err(|e: String| anyhow::anyhow!("CX_SEPARATOR: {e}")),
        None => Ok(None),
    }
}

/// `CX_STRICT=1` enables validated lists.
pub fn strict() -> bool {
    std::env::var("CX_STRICT").is_ok_and(|v| v == "1")
}

// --- Logging ---

/// Log filter directives from `CX_LOG` (e.g. `cx_parser=debug`).
pub fn log_filter() -> Option<String> {
    std::env::var("CX_LOG").ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
