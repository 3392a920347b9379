use crate::{
    escape::mermaid_escape,
    union_find::{DisjointSet, DisjointSetError},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fmt::Display, hash::Hash};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FromJsonError {
    #[error("From Json Error: {0}")]
    SyntaxError(#[from] serde_json::error::Error),
}

/// The groups of a [`DisjointSet`] in canonical order:
/// groups sorted by their first element, members by insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition<T> {
    pub groups: Vec<Vec<T>>,
}
impl<T> Partition<T> {
    pub fn new(groups: Vec<Vec<T>>) -> Self {
        Self { groups }
    }
    pub fn len(&self) -> usize {
        self.groups.len()
    }
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
impl<T: PartialEq> Partition<T> {
    /// Position of the group holding `x`.
    pub fn group_of(&self, x: &T) -> Option<usize> {
        self.groups.iter().position(|group| group.contains(x))
    }
}
impl<T: Serialize + DeserializeOwned> Partition<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap()
    }
    pub fn from_json(json: &str) -> Result<Self, FromJsonError> {
        serde_json::from_str(json).map_err(FromJsonError::SyntaxError)
    }
}
impl<T: Display> Partition<T> {
    pub fn to_mermaid(&self) -> String {
        let mut result = "".to_string();
        result.push_str("%%{ init: { 'theme': 'neutral' } }%%\n");
        result.push_str("graph TD\n");
        let mut node = 0;
        for (group, members) in self.groups.iter().enumerate() {
            result.push_str(&format!("subgraph G{}\n", group));
            for member in members {
                let label = mermaid_escape(&member.to_string());
                result.push_str(&format!("{}({})\n", node, label));
                node += 1;
            }
            result.push_str("end\n");
        }
        result
    }
    pub fn to_inline_mermaid(&self) -> String {
        let mermaid = self.to_mermaid();
        format!("\n```mermaid\n{}\n```\n", mermaid)
    }
    pub fn to_markdown(&self, title: &str, description: &str) -> String {
        let mermaid = self.to_inline_mermaid();
        format!("# {}\n\n{}\n{}", title, description, mermaid)
    }
}

/// A universe of elements and the pairs to merge, as read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionScript<T> {
    pub elements: Vec<T>,
    #[serde(default = "Vec::new")]
    pub unions: Vec<(T, T)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionOutcome<T> {
    pub partition: Partition<T>,
    /// Pairs naming at least one element outside the universe.
    pub rejected: Vec<(T, T)>,
}

impl<T> UnionScript<T>
where
    T: Clone + Eq + Hash,
{
    pub fn disjoint_set(&self) -> Result<DisjointSet<T>, DisjointSetError> {
        let mut set = DisjointSet::new(self.elements.iter().cloned())?;
        for (x, y) in &self.unions {
            set.union(x, y);
        }
        Ok(set)
    }
    /// Runs every union in order and collects the resulting groups.
    pub fn apply(&self) -> Result<UnionOutcome<T>, DisjointSetError> {
        let mut set = DisjointSet::new(self.elements.iter().cloned())?;
        let rejected: Vec<_> = self
            .unions
            .iter()
            .filter(|(x, y)| !set.union(x, y))
            .cloned()
            .collect();
        debug!(
            unions = self.unions.len(),
            rejected = rejected.len(),
            groups = set.group_count(),
            "union script applied"
        );
        Ok(UnionOutcome {
            partition: set.partition(),
            rejected,
        })
    }
}
impl<T: Serialize + DeserializeOwned> UnionScript<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap()
    }
    pub fn from_json(json: &str) -> Result<Self, FromJsonError> {
        serde_json::from_str(json).map_err(FromJsonError::SyntaxError)
    }
}
