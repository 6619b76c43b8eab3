use super::constants::MAX_FOOD;
use super::types::{Food, FoodTier, Point};
use rand::Rng;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodPool {
    items: Vec<Food>,
}

impl FoodPool {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[Food] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn positions(&self) -> Vec<Point> {
        self.items.iter().map(|food| food.position).collect()
    }

    /// Adds up to `amount` items on random cells, never growing the pool past `MAX_FOOD`.
    /// Returns how many were added.
    pub fn spawn<R: Rng + ?Sized>(&mut self, amount: usize, cells: u32, rng: &mut R) -> usize {
        let mut added = 0;
        for _ in 0..amount {
            if self.items.len() >= MAX_FOOD {
                continue;
            }
            let position = Point {
                x: rng.gen_range(0..cells) as f64,
                y: rng.gen_range(0..cells) as f64,
            };
            let tier = FoodTier::random(rng);
            self.items.push(Food { position, tier });
            added += 1;
        }
        added
    }

    /// Removes exactly one item equal to `food`.
    pub fn remove(&mut self, food: &Food) -> bool {
        let Some(index) = self.items.iter().position(|item| item == food) else {
            return false;
        };
        self.items.remove(index);
        true
    }

    /// Drops a random-tier item at `position`. Not bound by `MAX_FOOD`.
    pub fn drop_at<R: Rng + ?Sized>(&mut self, position: Point, rng: &mut R) {
        let tier = FoodTier::random(rng);
        self.items.push(Food { position, tier });
    }

    #[cfg(test)]
    pub fn insert(&mut self, food: Food) {
        self.items.push(food);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
