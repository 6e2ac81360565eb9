//! Include/exclude glob matching for reported file paths.

use crate::diff::normalize_path;
use crate::error::{DiffscanError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled include/exclude globs.
///
/// A path is reported when it matches no exclude glob and either the include
/// list is empty or it matches one of its globs.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: GlobSet,
    exclude: GlobSet,
    include_all: bool,
}

impl PathFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_globset(include, "include")?,
            exclude: build_globset(exclude, "exclude")?,
            include_all: include.is_empty(),
        })
    }

    /// A filter that reports every path.
    pub fn allow_all() -> Self {
        Self {
            include: GlobSet::empty(),
            exclude: GlobSet::empty(),
            include_all: true,
        }
    }

    pub fn allows(&self, path: &str) -> bool {
        let path = normalize_path(path);
        if self.exclude.is_match(&path) {
            return false;
        }
        self.include_all || self.include.is_match(&path)
    }
}

/// Build a GlobSet from patterns, naming the config field on failure.
fn build_globset(patterns: &[String], field_name: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            DiffscanError::ConfigError(format!(
                "invalid glob pattern in {}: '{}' - {}",
                field_name, pattern, e
            ))
        })?;
        builder.add(glob);
    }

    builder.build().map_err(|e| {
        DiffscanError::ConfigError(format!("failed to build {} glob set: {}", field_name, e))
    })
}
