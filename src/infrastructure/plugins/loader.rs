//! Skill loader - activates catalog skills against the controller
//!
//! Every entry gets exactly one load attempt. Failures are logged and
//! recorded in the [`LoadReport`]; nothing here aborts startup.

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::application::errors::SkillError;
use crate::application::messaging::Controller;
use super::registry::SkillCatalog;

/// One candidate skill, as found in a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    /// Name as listed, extension included
    pub file_name: String,
    /// Catalog key: the file name without its extension
    pub name: String,
}

impl SkillEntry {
    pub fn from_file_name(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let name = Path::new(&file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name.as_str())
            .to_string();
        Self { file_name, name }
    }
}

/// Result of a single load attempt
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded,
    /// A helper entry that is not a skill; not reported
    Suppressed,
    Failed(SkillError),
}

/// Outcomes of a loading pass, in attempt order
#[derive(Debug, Default)]
pub struct LoadReport {
    outcomes: Vec<(SkillEntry, LoadOutcome)>,
}

impl LoadReport {
    pub fn attempts(&self) -> usize {
        self.outcomes.len()
    }

    pub fn outcomes(&self) -> &[(SkillEntry, LoadOutcome)] {
        &self.outcomes
    }

    pub fn loaded(&self) -> Vec<&str> {
        self.select(|o| matches!(o, LoadOutcome::Loaded))
    }

    pub fn suppressed(&self) -> Vec<&str> {
        self.select(|o| matches!(o, LoadOutcome::Suppressed))
    }

    pub fn failed(&self) -> Vec<(&str, &SkillError)> {
        self.outcomes
            .iter()
            .filter_map(|(entry, outcome)| match outcome {
                LoadOutcome::Failed(e) => Some((entry.file_name.as_str(), e)),
                _ => None,
            })
            .collect()
    }

    fn select(&self, pred: impl Fn(&LoadOutcome) -> bool) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| pred(outcome))
            .map(|(entry, _)| entry.file_name.as_str())
            .collect()
    }
}

/// Resolves entries against a catalog and runs their registrars
pub struct SkillLoader<'a> {
    catalog: &'a SkillCatalog,
    helpers: HashSet<String>,
}

impl<'a> SkillLoader<'a> {
    pub fn new(catalog: &'a SkillCatalog) -> Self {
        Self {
            catalog,
            helpers: HashSet::new(),
        }
    }

    /// Entry names that are expected not to resolve as skills
    pub fn with_helpers<I, S>(mut self, helpers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.helpers = helpers.into_iter().map(Into::into).collect();
        self
    }

    /// List a skills directory (file names only, non-recursive).
    ///
    /// Order is whatever the filesystem returns. Dot-files are skipped.
    pub fn scan(dir: impl AsRef<Path>) -> Result<Vec<SkillEntry>, SkillError> {
        let dir = dir.as_ref();
        let read_dir = std::fs::read_dir(dir).map_err(|source| SkillError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!("Skipping non UTF-8 entry in {}", dir.display());
                continue;
            };
            if file_name.starts_with('.') {
                continue;
            }
            entries.push(SkillEntry::from_file_name(file_name));
        }

        Ok(entries)
    }

    /// One entry per catalog skill, in catalog order
    pub fn builtin_entries(&self) -> Vec<SkillEntry> {
        self.catalog
            .names()
            .into_iter()
            .map(SkillEntry::from_file_name)
            .collect()
    }

    /// Attempt every entry once, whatever happens to the others
    pub fn load_all(&self, entries: &[SkillEntry], controller: &mut Controller) -> LoadReport {
        let mut report = LoadReport::default();

        for entry in entries {
            let outcome = match self.load_one(entry, controller) {
                Ok(()) => {
                    tracing::info!("loaded skill: {}", entry.file_name);
                    LoadOutcome::Loaded
                }
                Err(e) if e.is_not_found() && self.is_helper(entry) => {
                    tracing::debug!("skipping helper entry: {}", entry.file_name);
                    LoadOutcome::Suppressed
                }
                Err(e) => {
                    tracing::warn!("could not load skill: {} ({})", entry.file_name, e);
                    LoadOutcome::Failed(e)
                }
            };
            report.outcomes.push((entry.clone(), outcome));
        }

        report
    }

    /// Resolve one entry and run its registrar, converting a panic into an error
    pub fn load_one(&self, entry: &SkillEntry, controller: &mut Controller) -> Result<(), SkillError> {
        let skill = self.catalog.get(&entry.name)?;

        match panic::catch_unwind(AssertUnwindSafe(|| skill.register(controller))) {
            Ok(result) => result,
            Err(payload) => Err(SkillError::Panicked(panic_message(payload.as_ref()))),
        }
    }

    fn is_helper(&self, entry: &SkillEntry) -> bool {
        self.helpers.contains(&entry.file_name) || self.helpers.contains(&entry.name)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
