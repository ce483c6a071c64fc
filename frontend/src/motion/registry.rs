use std::collections::BTreeMap;

/// Handles to animated elements, keyed by the ordinal a timeline uses.
///
/// Each section owns one and clears it on unmount, so nothing outlives the
/// elements it points at.
#[derive(Clone, Debug)]
pub struct TargetRegistry<T> {
    targets: BTreeMap<usize, T>,
}

impl<T> Default for TargetRegistry<T> {
    fn default() -> Self {
        Self {
            targets: BTreeMap::new(),
        }
    }
}

impl<T> TargetRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handle` under `index`, replacing any previous handle.
    pub fn register(&mut self, index: usize, handle: T) -> Option<T> {
        self.targets.insert(index, handle)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.targets.get(&index)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.targets.iter().map(|(i, t)| (*i, t))
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }
}

impl<T> FromIterator<(usize, T)> for TargetRegistry<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}
