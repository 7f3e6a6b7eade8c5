//! Group directory: resolved `{folder, upstream, zone}` per group key.

use crate::config::schema::GroupConfig;

/// A resolved group directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    pub key: String,
    pub folder: String,
    pub upstream: String,
    pub zone: String,
}

/// Ordered mapping from group key to entry.
///
/// Iteration order is declaration order, which is also the order zone lines
/// are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDirectory {
    entries: Vec<GroupEntry>,
}

impl GroupDirectory {
    pub fn new(entries: Vec<GroupEntry>) -> Self {
        Self { entries }
    }

    /// Build the directory from config, resolving `folder_env` overrides
    /// through `lookup`.
    pub fn from_config<F>(groups: &[GroupConfig], lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let entries = groups
            .iter()
            .map(|group| {
                let folder = group
                    .folder_env
                    .as_deref()
                    .and_then(&lookup)
                    .filter(|value| !value.is_empty())
                    .unwrap_or_else(|| group.folder.clone());
                GroupEntry {
                    key: group.key.clone(),
                    folder,
                    upstream: group.upstream.clone(),
                    zone: group.zone.clone(),
                }
            })
            .collect();
        Self { entries }
    }

    /// Build the directory using process environment variables.
    pub fn from_env(groups: &[GroupConfig]) -> Self {
        Self::from_config(groups, |name| std::env::var(name).ok())
    }

    pub fn get(&self, key: &str) -> Option<&GroupEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
