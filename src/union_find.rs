use crate::{numberer::Numberer, partition::Partition};
use std::{cmp::Ordering, hash::Hash};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisjointSetError {
    #[error("Duplicate element at position {position}, first seen at position {first}")]
    DuplicateElement { position: usize, first: usize },
}

/// Opaque name of a group, as returned by [`DisjointSet::find`].
///
/// Only compare two ids with each other. The value behind an id changes
/// when its group is merged, so never store one past the next `union`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

/// Union-find over a fixed universe of keys.
/// Union by rank with path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet<T>
where
    T: Clone + Eq + Hash,
{
    /// key -> index, indices assigned in insertion order
    elements: Numberer<T>,
    parent: Vec<usize>,
    rank: Vec<usize>,
    groups: usize,
}
impl<T> DisjointSet<T>
where
    T: Clone + Eq + Hash,
{
    /// One singleton group per element.
    /// Fails on the first element that repeats an earlier one.
    pub fn new<I>(elements: I) -> Result<Self, DisjointSetError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = elements.into_iter();
        let mut set = Self {
            elements: Numberer::with_capacity(iter.size_hint().0),
            parent: Vec::with_capacity(iter.size_hint().0),
            rank: Vec::with_capacity(iter.size_hint().0),
            groups: 0,
        };
        for element in iter {
            set.insert(element)?;
        }
        debug!(elements = set.len(), "disjoint set built");
        Ok(set)
    }
    /// Appends `element` as a new singleton group and returns its index.
    /// Indices of existing elements are unaffected.
    pub fn insert(&mut self, element: T) -> Result<usize, DisjointSetError> {
        let position = self.len();
        let index = self
            .elements
            .fresh(element)
            .map_err(|first| DisjointSetError::DuplicateElement { position, first })?;
        self.parent.push(index);
        self.rank.push(0);
        self.groups += 1;
        Ok(index)
    }
    pub fn len(&self) -> usize {
        self.parent.len()
    }
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
    pub fn contains(&self, x: &T) -> bool {
        self.elements.get(x).is_some()
    }
    pub fn index_of(&self, x: &T) -> Option<usize> {
        self.elements.get(x)
    }
    /// Elements in index order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.elements.keys().iter()
    }
    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups
    }
    /// Group of `x`, or `None` if `x` was never inserted.
    pub fn find(&mut self, x: &T) -> Option<GroupId> {
        let index = self.elements.get(x)?;
        Some(GroupId(self.root(index)))
    }
    /// Merges the groups of `x` and `y`.
    /// Returns `false` without touching anything if either is unknown.
    pub fn union(&mut self, x: &T, y: &T) -> bool {
        let (Some(x), Some(y)) = (self.elements.get(x), self.elements.get(y)) else {
            return false;
        };
        let x_root = self.root(x);
        let y_root = self.root(y);
        if x_root == y_root {
            return true;
        }
        // Ties keep x's root on top.
        let (parent, child) = match self.rank[x_root].cmp(&self.rank[y_root]) {
            Ordering::Less => (y_root, x_root),
            Ordering::Greater => (x_root, y_root),
            Ordering::Equal => {
                self.rank[x_root] += 1;
                (x_root, y_root)
            }
        };
        self.parent[child] = parent;
        self.groups -= 1;
        trace!(parent, child, groups = self.groups, "groups merged");
        true
    }
    /// Whether `x` and `y` are both known and share a group.
    pub fn same(&mut self, x: &T, y: &T) -> bool {
        match (self.find(x), self.find(y)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
    /// Splits everything back into singletons. Indices are kept.
    pub fn reset(&mut self) {
        for (index, parent) in self.parent.iter_mut().enumerate() {
            *parent = index;
        }
        self.rank.iter_mut().for_each(|rank| *rank = 0);
        self.groups = self.len();
        debug!(elements = self.len(), "disjoint set reset");
    }
    /// One representative element per group, in index order.
    pub fn components(&mut self) -> Vec<T> {
        let mut components = Vec::with_capacity(self.groups);
        for i in 0..self.len() {
            if self.root(i) == i {
                components.extend(self.elements.key(i).cloned());
            }
        }
        components
    }
    /// Group label of every index.
    /// Labels are dense from 0, numbered by first appearance in index order.
    pub fn labels(&mut self) -> Vec<usize> {
        let mut r = Numberer::with_capacity(self.groups);
        (0..self.len()).map(|i| r.i(self.root(i))).collect()
    }
    /// Groups ordered by their first index, members in index order.
    pub fn groups(&mut self) -> Vec<Vec<T>> {
        let labels = self.labels();
        let mut groups = vec![Vec::new(); self.groups];
        for (key, label) in self.elements.keys().iter().zip(labels) {
            groups[label].push(key.clone());
        }
        groups
    }
    pub fn partition(&mut self) -> Partition<T> {
        Partition::new(self.groups())
    }
    /// Root of `index`, repointing every node on the way directly at it.
    fn root(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = index;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}
impl<T> TryFrom<Vec<T>> for DisjointSet<T>
where
    T: Clone + Eq + Hash,
{
    type Error = DisjointSetError;
    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}
