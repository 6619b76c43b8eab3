use super::constants::{COLLISION_DISTANCE, DEATH_DROP_CHANCE, PICKUP_DISTANCE};
use super::food::FoodPool;
use super::math::distance;
use super::snake::Snake;
use super::types::{EntityId, Food, Point};
use rand::Rng;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub eaten: Vec<Food>,
    pub growth: u32,
    pub eliminated_by: Option<EntityId>,
    pub dropped: usize,
}

/// Resolves food pickup and body collisions for one snake after everyone has moved.
pub fn resolve<R: Rng + ?Sized>(
    id: EntityId,
    snakes: &mut [Snake],
    food: &mut FoodPool,
    cells: u32,
    rng: &mut R,
) -> Resolution {
    let mut resolution = Resolution::default();
    let Some(snake) = snakes.get(id.0) else { return resolution };
    if !snake.alive {
        return resolution;
    }
    let head = snake.head();

    let touching: Vec<Food> = food
        .items()
        .iter()
        .filter(|item| distance(head, item.position) < PICKUP_DISTANCE)
        .copied()
        .collect();
    for item in touching {
        if !food.remove(&item) {
            continue;
        }
        let amount = item.tier.growth();
        snakes[id.0].grow(amount);
        resolution.growth += amount;
        resolution.eaten.push(item);
        food.spawn(1, cells, rng);
    }

    let Some(other) = find_body_contact(id, head, snakes) else { return resolution };
    let snake = &mut snakes[id.0];
    snake.eliminate();
    let body: Vec<Point> = snake.segments.iter().copied().collect();
    for segment in body {
        if rng.gen::<f64>() < DEATH_DROP_CHANCE {
            food.drop_at(segment, rng);
            resolution.dropped += 1;
        }
    }
    tracing::debug!(
        entity = id.0,
        by = other.0,
        is_bot = snakes[id.0].is_bot,
        dropped = resolution.dropped,
        "snake eliminated"
    );
    resolution.eliminated_by = Some(other);
    resolution
}

/// First other living snake whose body (head excluded) touches `head`.
pub fn find_body_contact(id: EntityId, head: Point, snakes: &[Snake]) -> Option<EntityId> {
    snakes
        .iter()
        .enumerate()
        .filter(|(index, other)| *index != id.0 && other.alive)
        .find(|(_, other)| {
            other
                .segments
                .iter()
                .skip(1)
                .any(|segment| distance(head, *segment) < COLLISION_DISTANCE)
        })
        .map(|(index, _)| EntityId(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::STARTING_LENGTH;
    use crate::game::types::{Color, FoodTier};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    fn make_snake(is_bot: bool, body: &[(f64, f64)]) -> Snake {
        let mut snake = Snake::new(
            "Test".to_string(),
            Point { x: 0.0, y: 0.0 },
            Color::rgb(255, 255, 255),
            is_bot,
            0.0,
            100.0,
        );
        snake.segments = body.iter().map(|(x, y)| Point { x: *x, y: *y }).collect::<VecDeque<_>>();
        snake
    }

    fn horizontal(start: f64, y: f64, len: usize) -> Vec<(f64, f64)> {
        (0..len).map(|i| (start - i as f64, y)).collect()
    }

    #[test]
    fn small_food_in_reach_is_eaten_and_replaced() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut snakes = vec![make_snake(false, &horizontal(50.0, 50.0, STARTING_LENGTH))];
        let mut pool = FoodPool::new();
        let small = Food {
            position: Point { x: 51.5, y: 50.0 },
            tier: FoodTier::Small,
        };
        pool.insert(small);

        let resolution = resolve(EntityId(0), &mut snakes, &mut pool, 100, &mut rng);

        assert_eq!(resolution.eaten, vec![small]);
        assert_eq!(snakes[0].score, 1);
        assert_eq!(snakes[0].length, STARTING_LENGTH + 1);
        assert_eq!(pool.len(), 1);
        assert!(!pool.items().contains(&small));
        assert!(snakes[0].alive);
    }

    #[test]
    fn every_food_in_reach_is_eaten_in_one_tick() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut snakes = vec![make_snake(true, &horizontal(50.0, 50.0, STARTING_LENGTH))];
        let mut pool = FoodPool::new();
        pool.insert(Food {
            position: Point { x: 50.0, y: 51.0 },
            tier: FoodTier::Medium,
        });
        pool.insert(Food {
            position: Point { x: 49.0, y: 49.0 },
            tier: FoodTier::Large,
        });
        pool.insert(Food {
            position: Point { x: 80.0, y: 80.0 },
            tier: FoodTier::Large,
        });

        let resolution = resolve(EntityId(0), &mut snakes, &mut pool, 100, &mut rng);

        assert_eq!(resolution.growth, 5);
        assert_eq!(snakes[0].score, 5);
        assert_eq!(snakes[0].radius, 6);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn head_on_another_body_eliminates_only_the_attacker() {
        let mut rng = StdRng::seed_from_u64(3);
        let attacker = make_snake(true, &[(20.0, 10.3), (19.0, 10.3), (18.0, 10.3)]);
        let victim = make_snake(true, &horizontal(21.0, 10.0, STARTING_LENGTH));
        let mut snakes = vec![
            make_snake(false, &horizontal(80.0, 80.0, STARTING_LENGTH)),
            attacker,
            victim,
        ];
        let mut pool = FoodPool::new();

        let resolution = resolve(EntityId(1), &mut snakes, &mut pool, 100, &mut rng);

        assert_eq!(resolution.eliminated_by, Some(EntityId(2)));
        assert!(!snakes[1].alive);
        assert!(snakes[2].alive);
        assert_eq!(snakes[2].segments.len(), STARTING_LENGTH);
        assert_eq!(pool.len(), resolution.dropped);
        for item in pool.items() {
            assert!(snakes[1].segments.contains(&item.position));
        }
    }

    fn collide_with(rng: &mut StepRng) -> (Vec<Snake>, FoodPool, Resolution) {
        let mut snakes = vec![
            make_snake(false, &horizontal(80.0, 80.0, STARTING_LENGTH)),
            make_snake(true, &horizontal(20.0, 10.3, 6)),
            make_snake(true, &horizontal(21.0, 10.0, STARTING_LENGTH)),
        ];
        let mut pool = FoodPool::new();
        let resolution = resolve(EntityId(1), &mut snakes, &mut pool, 100, rng);
        (snakes, pool, resolution)
    }

    #[test]
    fn failed_drop_rolls_leave_no_food() {
        let (snakes, pool, resolution) = collide_with(&mut StepRng::new(u64::MAX, 0));
        assert_eq!(resolution.eliminated_by, Some(EntityId(2)));
        assert!(!snakes[1].alive);
        assert_eq!(resolution.dropped, 0);
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn passed_drop_rolls_leave_food_on_every_segment() {
        let (snakes, pool, resolution) = collide_with(&mut StepRng::new(0, 0));
        assert_eq!(resolution.eliminated_by, Some(EntityId(2)));
        assert_eq!(resolution.dropped, 6);
        let positions = pool.positions();
        let body: Vec<Point> = snakes[1].segments.iter().copied().collect();
        assert_eq!(positions, body);
    }

    #[test]
    fn touching_only_a_head_is_harmless() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut snakes = vec![
            make_snake(false, &horizontal(30.0, 30.0, 5)),
            make_snake(true, &[(30.5, 30.0), (31.5, 30.0), (32.5, 30.0)]),
        ];
        let mut pool = FoodPool::new();

        let resolution = resolve(EntityId(0), &mut snakes, &mut pool, 100, &mut rng);

        assert_eq!(resolution.eliminated_by, None);
        assert!(snakes[0].alive);
    }

    #[test]
    fn dead_snakes_are_not_obstacles() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut snakes = vec![
            make_snake(false, &horizontal(30.0, 30.0, 5)),
            make_snake(true, &horizontal(32.0, 30.2, 6)),
        ];
        snakes[1].eliminate();
        let mut pool = FoodPool::new();

        let resolution = resolve(EntityId(0), &mut snakes, &mut pool, 100, &mut rng);

        assert_eq!(resolution, Resolution::default());
        assert!(snakes[0].alive);
    }

    #[test]
    fn own_body_never_counts() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut snakes = vec![make_snake(false, &[(5.0, 5.0), (5.2, 5.0), (5.4, 5.0)])];
        let mut pool = FoodPool::new();

        resolve(EntityId(0), &mut snakes, &mut pool, 100, &mut rng);

        assert!(snakes[0].alive);
    }
}
