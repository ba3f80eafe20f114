//! Stationary resource points scattered over the arena.

use bevy_ecs::prelude::*;
use glam::DVec2;
use rand::Rng;

use super::geometry::random_point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub position: DVec2,
}

/// Live food, kept in insertion order. Scans see items in this order.
#[derive(Resource, Debug, Clone, Default)]
pub struct FoodField {
    items: Vec<Food>,
}

impl FoodField {
    pub fn new(items: Vec<Food>) -> Self {
        Self { items }
    }

    pub fn populate<R: Rng + ?Sized>(count: usize, world_dimensions: (f64, f64), rng: &mut R) -> Self {
        let items = (0..count)
            .map(|_| Food { position: random_point(rng, world_dimensions) })
            .collect();
        Self { items }
    }

    /// Index of the first item strictly closer than `radius` to `point`.
    pub fn first_within(&self, point: DVec2, radius: f64) -> Option<usize> {
        self.items
            .iter()
            .position(|food| food.position.distance(point) < radius)
    }

    /// Removes an item, keeping the order of the rest intact.
    pub fn remove(&mut self, index: usize) -> Food {
        self.items.remove(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn food(x: f64, y: f64) -> Food {
        Food { position: DVec2::new(x, y) }
    }

    #[test]
    fn populate_places_requested_count_inside_arena() {
        let mut rng = StdRng::seed_from_u64(9);
        let field = FoodField::populate(200, (800.0, 600.0), &mut rng);
        assert_eq!(field.len(), 200);
        assert!(field
            .iter()
            .all(|f| (0.0..=800.0).contains(&f.position.x) && (0.0..=600.0).contains(&f.position.y)));
    }

    #[test]
    fn first_within_returns_earliest_match() {
        let field = FoodField::new(vec![food(100.0, 100.0), food(5.0, 0.0), food(1.0, 0.0)]);
        assert_eq!(field.first_within(DVec2::ZERO, 10.0), Some(1));
        assert_eq!(field.first_within(DVec2::ZERO, 0.5), None);
    }

    #[test]
    fn radius_is_exclusive() {
        let field = FoodField::new(vec![food(10.0, 0.0)]);
        assert_eq!(field.first_within(DVec2::ZERO, 10.0), None);
    }

    #[test]
    fn removal_preserves_order() {
        let mut field = FoodField::new(vec![food(1.0, 0.0), food(2.0, 0.0), food(3.0, 0.0)]);
        assert_eq!(field.remove(1), food(2.0, 0.0));
        let xs: Vec<f64> = field.iter().map(|f| f.position.x).collect();
        assert_eq!(xs, vec![1.0, 3.0]);
        assert!(!field.is_empty());
    }
}
