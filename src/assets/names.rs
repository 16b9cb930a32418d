use std::{collections::HashSet, path::Path};

use anyhow::Context as _;
use rand::Rng;

use crate::foundation::error::{CatError, CatResult};

/// Names handed out without repetition, with synthetic `Cat_<n>` names once exhausted.
///
/// Synthetic names skip anything already handed out, so a file entry like `Cat_1` is never
/// issued twice.
#[derive(Clone, Debug, Default)]
pub struct NamePool {
    names: Vec<String>,
    issued: HashSet<String>,
    next_fallback: usize,
    fallbacks: usize,
}

impl NamePool {
    /// Entries are taken verbatim, duplicates dropped; see [`Self::from_lines`] for the file
    /// format.
    pub fn new(names: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .filter(|n| seen.insert(n.clone()))
            .collect();
        Self {
            names,
            ..Self::default()
        }
    }

    /// One entry per non-blank line; the name is the last whitespace-separated token, so
    /// numbered lines like `"12 Barsik"` yield `"Barsik"`.
    pub fn from_lines(text: &str) -> Self {
        let names = text
            .lines()
            .filter_map(|line| line.split_whitespace().last())
            .map(str::to_string)
            .collect();
        Self::new(names)
    }

    pub fn from_file(path: &Path) -> CatResult<Self> {
        if !path.is_file() {
            return Err(CatError::missing_resource(format!(
                "names file not found: {}",
                path.display()
            )));
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read names file '{}'", path.display()))?;
        let pool = Self::from_lines(&text);
        tracing::info!(count = pool.remaining(), path = %path.display(), "loaded cat names");
        Ok(pool)
    }

    pub fn remaining(&self) -> usize {
        self.names.len()
    }

    /// Number of synthetic names handed out so far.
    pub fn fallbacks_issued(&self) -> usize {
        self.fallbacks
    }

    /// Draw and remove a random name, prefixed with `prefix` when given.
    pub fn next_name<R: Rng + ?Sized>(&mut self, rng: &mut R, prefix: Option<&str>) -> String {
        let prefix = prefix.unwrap_or("");
        let name = if self.names.is_empty() {
            let name = loop {
                self.next_fallback += 1;
                let candidate = format!("{prefix}Cat_{}", self.next_fallback);
                if !self.issued.contains(&candidate) {
                    break candidate;
                }
            };
            self.fallbacks += 1;
            tracing::warn!(
                name = %name,
                fallback = self.fallbacks,
                "ran out of names, generating one"
            );
            name
        } else {
            let idx = rng.gen_range(0..self.names.len());
            let name = format!("{prefix}{}", self.names.swap_remove(idx));
            tracing::debug!(name = %name, "drew name");
            name
        };
        self.issued.insert(name.clone());
        name
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/names.rs"]
mod tests;
