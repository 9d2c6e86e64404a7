use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One quote record, persisted exactly as extracted. The difficulty and
/// category labels are kept as strings; only the category is matched
/// against the known set, and that happens before the store is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub source: String,
    pub difficulty: String,
    pub category: String,
    pub origin: String,
}

pub enum MergeOutcome {
    Created { written: usize },
    Appended { added: usize, total: usize },
    NoNew,
}

/// Load a persisted category file. A file that exists but does not parse as
/// a quote array is an error, not a silent reset.
pub fn load(path: &Path) -> Result<Vec<Quote>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing {} as a JSON quote array", path.display()))
}

/// Merge `incoming` quotes into the category's file under `dir`.
///
/// Quotes whose `text` is already persisted are dropped; existing entries
/// keep their order and content. When nothing new remains the file is not
/// touched, and no file is created for an empty batch.
pub fn merge(dir: &Path, category: Category, incoming: &[Quote]) -> Result<MergeOutcome> {
    if incoming.is_empty() {
        return Ok(MergeOutcome::NoNew);
    }

    let path = dir.join(category.file_name());

    if !path.exists() {
        let mut seen = HashSet::new();
        let fresh: Vec<&Quote> = incoming
            .iter()
            .filter(|q| seen.insert(q.text.as_str()))
            .collect();
        write(&path, &fresh)?;
        return Ok(MergeOutcome::Created {
            written: fresh.len(),
        });
    }

    let existing = load(&path)?;
    let fresh: Vec<Quote> = {
        let mut seen: HashSet<&str> = existing.iter().map(|q| q.text.as_str()).collect();
        incoming
            .iter()
            .filter(|q| seen.insert(q.text.as_str()))
            .cloned()
            .collect()
    };

    if fresh.is_empty() {
        return Ok(MergeOutcome::NoNew);
    }

    let added = fresh.len();
    let mut merged = existing;
    merged.extend(fresh);
    write(&path, &merged)?;

    Ok(MergeOutcome::Appended {
        added,
        total: merged.len(),
    })
}

fn write<T: Serialize>(path: &Path, quotes: &[T]) -> Result<()> {
    let pretty = serde_json::to_string_pretty(quotes)?;
    fs::write(path, pretty).with_context(|| format!("writing {}", path.display()))
}
