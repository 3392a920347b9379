use std::collections::HashMap;

/// Assigns dense indices to keys in first-seen order.
/// Index `i` always maps back to the `i`-th distinct key handed in.
#[derive(Debug, Clone)]
pub struct Numberer<T>
where
    T: Clone + Eq + std::hash::Hash,
{
    map: HashMap<T, usize>,
    keys: Vec<T>,
}
impl<T> Numberer<T>
where
    T: Clone + Eq + std::hash::Hash,
{
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            keys: Vec::new(),
        }
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
        }
    }
    pub fn len(&self) -> usize {
        self.keys.len()
    }
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
    /// Index of `item`, assigning the next free one if it was never seen.
    pub fn i(&mut self, item: T) -> usize {
        match self.fresh(item) {
            Ok(index) | Err(index) => index,
        }
    }
    /// Assigns a new index to `item`.
    /// Returns `Err` with the existing index if `item` is already numbered.
    pub fn fresh(&mut self, item: T) -> Result<usize, usize> {
        if let Some(&index) = self.map.get(&item) {
            return Err(index);
        }
        let index = self.keys.len();
        self.map.insert(item.clone(), index);
        self.keys.push(item);
        Ok(index)
    }
    pub fn get(&self, item: &T) -> Option<usize> {
        self.map.get(item).copied()
    }
    pub fn key(&self, index: usize) -> Option<&T> {
        self.keys.get(index)
    }
    pub fn keys(&self) -> &[T] {
        &self.keys
    }
}
impl<T> Default for Numberer<T>
where
    T: Clone + Eq + std::hash::Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
