use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use console::style;
use mapref_core::Reference;
use serde_json::{Map, Value};

use super::read_input;

/// Parse every file. A single file prints its reference (or `null`); several
/// files print an object keyed by path. Failures go to stderr and make the
/// command fail once every file has been tried.
pub fn run(paths: &[PathBuf]) -> Result<()> {
    let mut results = Map::new();
    let mut failed = 0usize;

    for path in paths {
        let display = path.display().to_string();
        match parse_file(path) {
            Ok(reference) => {
                results.insert(display, serde_json::to_value(reference)?);
            }
            Err(e) => {
                eprintln!("{} {}: {e:#}", style("✗").red(), style(&display).bold());
                failed += 1;
            }
        }
    }

    let output = if paths.len() == 1 {
        results.into_iter().next().map_or(Value::Null, |(_, v)| v)
    } else {
        Value::Object(results)
    };

    if paths.len() > 1 || failed == 0 {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    }

    if failed > 0 {
        bail!("{failed} of {} file(s) failed", paths.len());
    }

    Ok(())
}

fn parse_file(path: &Path) -> Result<Option<Reference>> {
    let content = read_input(path)?;
    let reference = mapref_core::parse(&content)?;

    if reference.is_none() {
        tracing::debug!("No source map comment in {}", path.display());
    }
    Ok(reference)
}
