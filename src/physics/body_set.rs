use super::body::Body;

use thunderdome as td;

/// Key type to look up a body stored in the world.
///
/// Keys are generation-checked: once a body is removed, its key
/// stops resolving even if the slot is reused by a newer body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyKey(pub(super) td::Index);

impl BodyKey {
    /// Get the underlying [`thunderdome::Index`][thunderdome::Index] of this key.
    /// Useful for creating your own mappings from bodies to other things
    /// such as render handles.
    #[inline]
    pub fn index(&self) -> td::Index {
        self.0
    }
}

/// Storage for every body in the world.
///
/// Bodies live in an arena, and their insertion order is tracked separately
/// because pairs are visited in that order during collision resolution.
#[derive(Default)]
pub struct BodySet {
    pub(super) bodies: td::Arena<Body>,
    pub(super) order: Vec<BodyKey>,
}

impl BodySet {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Access a [`Body`][super::Body], if it still exists.
    #[inline]
    pub fn get(&self, key: BodyKey) -> Option<&Body> {
        self.bodies.get(key.0)
    }

    /// Mutably access a [`Body`][super::Body], if it still exists.
    #[inline]
    pub fn get_mut(&mut self, key: BodyKey) -> Option<&mut Body> {
        self.bodies.get_mut(key.0)
    }

    /// Mutably access two different bodies at once.
    ///
    /// # Panics
    /// If both keys are the same.
    #[inline]
    pub(crate) fn get2_mut(
        &mut self,
        k1: BodyKey,
        k2: BodyKey,
    ) -> (Option<&mut Body>, Option<&mut Body>) {
        self.bodies.get2_mut(k1.0, k2.0)
    }

    #[inline]
    pub fn contains(&self, key: BodyKey) -> bool {
        self.bodies.contains(key.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.len() == 0
    }

    /// Keys of every body in insertion order.
    #[inline]
    pub fn keys(&self) -> &[BodyKey] {
        &self.order
    }

    /// Iterate over every body in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyKey, &Body)> + '_ {
        self.order
            .iter()
            .filter_map(move |&key| self.bodies.get(key.0).map(|body| (key, body)))
    }

    pub(crate) fn insert(&mut self, body: Body) -> BodyKey {
        let key = BodyKey(self.bodies.insert(body));
        self.order.push(key);
        key
    }

    /// Remove a body, returning it if it still existed.
    pub(crate) fn remove(&mut self, key: BodyKey) -> Option<Body> {
        let body = self.bodies.remove(key.0)?;
        self.order.retain(|&k| k != key);
        Some(body)
    }

    /// Keep only the bodies for which the predicate returns true,
    /// returning the keys of the removed ones.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Body) -> bool) -> Vec<BodyKey> {
        let mut removed = Vec::new();
        let bodies = &mut self.bodies;
        self.order.retain(|&key| {
            let kept = match bodies.get(key.0) {
                Some(body) => keep(body),
                None => return false,
            };
            if !kept {
                bodies.remove(key.0);
                removed.push(key);
            }
            kept
        });
        removed
    }

    pub(crate) fn clear(&mut self) {
        self.bodies.clear();
        self.order.clear();
    }
}
