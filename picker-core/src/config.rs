//! Group registry configuration
//!
//! The registry is a YAML document listing named groups of candidate items
//! plus an optional default group. It is loaded once per invocation and passed
//! explicitly to the [`Picker`](crate::Picker) and [`Reporter`](crate::Reporter).

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::PickerError;
use crate::history::validate_entry;

/// Errors raised while reading, validating or writing the group registry
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("duplicate group name: {0}")]
    DuplicateGroup(String),

    #[error("invalid group name {0:?}: names must be non-empty and usable as a file name")]
    InvalidGroupName(String),

    #[error("invalid item {item:?} in group {group}: items must be non-empty single lines")]
    InvalidItem { group: String, item: String },

    #[error("default_group {0:?} does not match any configured group")]
    UnknownDefaultGroup(String),
}

/// A named, ordered list of candidate items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    /// Duplicates are allowed; equal values share one history entry.
    #[serde(default)]
    pub items: Vec<String>,
}

impl Group {
    pub fn new<N, I, S>(name: N, items: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The whole group registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_group: Option<String>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl PickerConfig {
    /// Parse and validate a registry document.
    ///
    /// A blank document yields an empty registry.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(ConfigError::Serialize)
    }

    /// Registry written by `rp gen-config`.
    pub fn sample() -> Self {
        Self {
            default_group: Some("games".to_string()),
            groups: vec![Group::new("games", ["Balatro", "Marvel Rivals"])],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for group in &self.groups {
            if !is_safe_group_name(&group.name) {
                return Err(ConfigError::InvalidGroupName(group.name.clone()));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(ConfigError::DuplicateGroup(group.name.clone()));
            }
            if let Some(item) = group.items.iter().find(|i| validate_entry(i).is_err()) {
                return Err(ConfigError::InvalidItem {
                    group: group.name.clone(),
                    item: item.clone(),
                });
            }
        }
        if let Some(default) = &self.default_group
            && !seen.contains(default.as_str())
        {
            return Err(ConfigError::UnknownDefaultGroup(default.clone()));
        }
        Ok(())
    }

    pub fn group_names(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.name.clone()).collect()
    }

    /// Look up a group by exact name.
    pub fn group(&self, name: &str) -> Result<&Group, PickerError> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| PickerError::GroupNotFound {
                name: name.to_string(),
                valid: self.group_names(),
            })
    }

    /// Resolve the group to operate on: the requested name wins over
    /// `default_group`.
    pub fn resolve_group(&self, requested: Option<&str>) -> Result<&Group, PickerError> {
        match requested.or(self.default_group.as_deref()) {
            Some(name) => self.group(name),
            None => Err(PickerError::NoGroupSelected),
        }
    }
}

/// Whether `name` can key a history file without escaping its directory.
pub fn is_safe_group_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
        && !name.contains(['\n', '\r'])
}
