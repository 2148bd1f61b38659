//! Widget key composition
//!
//! Widgets name their random streams `instance::feature[::scope]`, where the
//! scope is usually a date so demo data rolls over once per day.

use crate::generator::Generator;
use crate::seed::{hash_seed, Seed};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SEPARATOR: &str = "::";

/// Errors from parsing or validating a composed key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("key '{key}' has {found} segments, expected 2 or 3")]
    SegmentCount { key: String, found: usize },

    #[error("key '{key}' has an empty segment at position {position}")]
    EmptySegment { key: String, position: usize },

    #[error("key '{key}' has a '::' inside segment {position}")]
    SeparatorInSegment { key: String, position: usize },
}

/// Segments must be non-empty and free of the separator so that the rendered
/// key parses back into the same structure.
fn check_segment(key: &str, position: usize, segment: &str) -> Result<(), KeyParseError> {
    if segment.is_empty() {
        return Err(KeyParseError::EmptySegment {
            key: key.to_string(),
            position,
        });
    }
    if segment.contains(SEPARATOR) {
        return Err(KeyParseError::SeparatorInSegment {
            key: key.to_string(),
            position,
        });
    }
    Ok(())
}

/// Structured form of a widget seed key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeedKey {
    instance: String,
    feature: String,
    scope: Option<String>,
}

impl SeedKey {
    /// Unchecked constructor. Empty segments or segments containing `::`
    /// still hash fine, but their rendered form does not parse back into the
    /// same key; use [`SeedKey::try_new`] when that matters.
    pub fn new(instance: impl Into<String>, feature: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            feature: feature.into(),
            scope: None,
        }
    }

    /// Checked constructor applying the same segment rules as parsing.
    pub fn try_new(
        instance: impl Into<String>,
        feature: impl Into<String>,
    ) -> Result<Self, KeyParseError> {
        let key = Self::new(instance, feature);
        let rendered = key.to_string();
        check_segment(&rendered, 0, &key.instance)?;
        check_segment(&rendered, 1, &key.feature)?;
        Ok(key)
    }

    /// Narrow the key to a temporal scope (a date, a visit id, ...).
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Checked form of [`SeedKey::with_scope`].
    pub fn try_with_scope(self, scope: impl Into<String>) -> Result<Self, KeyParseError> {
        let key = self.with_scope(scope);
        if let Some(scope) = &key.scope {
            check_segment(&key.to_string(), 2, scope)?;
        }
        Ok(key)
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn seed(&self) -> Seed {
        hash_seed(&self.to_string())
    }

    /// Fresh generator for this key.
    pub fn generator(&self) -> Generator {
        Generator::new(self.seed())
    }
}

impl fmt::Display for SeedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.instance, self.feature)?;
        if let Some(scope) = &self.scope {
            write!(f, "{SEPARATOR}{scope}")?;
        }
        Ok(())
    }
}

impl FromStr for SeedKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(KeyParseError::SegmentCount {
                key: s.to_string(),
                found: parts.len(),
            });
        }
        for (position, segment) in parts.iter().enumerate() {
            check_segment(s, position, segment)?;
        }

        let key = SeedKey::new(parts[0], parts[1]);
        Ok(match parts.get(2) {
            Some(scope) => key.with_scope(*scope),
            None => key,
        })
    }
}
