// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::trace;

use crate::{PointAnnotation, PointId};

/// Ordered collection of point annotations.
///
/// Insertion order is display order. A revision counter bumps on every
/// successful mutation so views can cheaply tell whether they are stale.
#[derive(Clone, Debug, Default)]
pub struct AnnotationStore {
    points: Vec<PointAnnotation>,
    next_id: u64,
    revision: u64,
}

impl AnnotationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point at content position (`x`, `y`) and return its id.
    pub fn add(&mut self, x: f64, y: f64) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points.push(PointAnnotation::new(id, x, y));
        self.revision += 1;
        id
    }

    /// Remove a point. Returns `false` if `id` is unknown.
    pub fn remove(&mut self, id: PointId) -> bool {
        let Some(index) = self.index_of(id) else {
            trace!("remove: no point {id}");
            return false;
        };
        self.points.remove(index);
        self.revision += 1;
        true
    }

    /// Rename a point. Returns `false` if `id` is unknown.
    ///
    /// The name is taken as-is; validating user input is up to the caller.
    pub fn rename(&mut self, id: PointId, name: impl Into<String>) -> bool {
        let Some(point) = self.get_mut(id) else {
            trace!("rename: no point {id}");
            return false;
        };
        point.name = name.into();
        self.revision += 1;
        true
    }

    /// Move a point by a content-space delta. Returns `false` if `id` is unknown.
    pub fn move_by(&mut self, id: PointId, dx: f64, dy: f64) -> bool {
        let Some(point) = self.get_mut(id) else {
            trace!("move_by: no point {id}");
            return false;
        };
        point.x += dx;
        point.y += dy;
        self.revision += 1;
        true
    }

    /// All points in display order.
    #[must_use]
    pub fn list(&self) -> &[PointAnnotation] {
        &self.points
    }

    /// Look up a point.
    #[must_use]
    pub fn get(&self, id: PointId) -> Option<&PointAnnotation> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Returns `true` if `id` is in the store.
    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        self.index_of(id).is_some()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The id the next [`add`](Self::add) will assign.
    #[must_use]
    pub fn next_id(&self) -> PointId {
        PointId(self.next_id)
    }

    /// Mutation counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Remove every point. Ids are not reset.
    pub fn clear(&mut self) {
        if self.points.is_empty() {
            return;
        }
        self.points.clear();
        self.revision += 1;
    }

    fn index_of(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PointId) -> Option<&mut PointAnnotation> {
        self.points.iter_mut().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_sequential_ids_from_zero() {
        let mut store = AnnotationStore::new();
        assert_eq!(store.add(0.0, 0.0), PointId(0));
        assert_eq!(store.add(0.0, 0.0), PointId(1));
        assert_eq!(store.next_id(), PointId(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn rename_and_move_touch_only_target() {
        let mut store = AnnotationStore::new();
        let a = store.add(1.0, 1.0);
        let b = store.add(2.0, 2.0);
        assert!(store.rename(a, "corner"));
        assert!(store.move_by(b, 1.0, -1.0));

        assert_eq!(store.get(a).unwrap().name, "corner");
        assert_eq!(store.get(a).unwrap().position(), kurbo::Point::new(1.0, 1.0));
        assert_eq!(store.get(b).unwrap().name, "POINT_1");
        assert_eq!(store.get(b).unwrap().position(), kurbo::Point::new(3.0, 1.0));
    }

    #[test]
    fn revision_tracks_successful_mutations_only() {
        let mut store = AnnotationStore::new();
        let id = store.add(0.0, 0.0);
        assert_eq!(store.revision(), 1);
        assert!(!store.remove(PointId(42)));
        assert_eq!(store.revision(), 1);
        assert!(store.rename(id, "x"));
        assert_eq!(store.revision(), 2);
        store.clear();
        assert_eq!(store.revision(), 3);
        store.clear();
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn clear_keeps_id_counter() {
        let mut store = AnnotationStore::new();
        store.add(0.0, 0.0);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.add(0.0, 0.0), PointId(1));
    }
}
