use super::constants::{SEEK_BLEND, SEEK_CHANCE, WANDER_INTERVAL_TICKS};
use super::math::{angle_to, nearest_index};
use super::types::Point;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderState {
    pub angle: f64,
    pub timer: u32,
}

impl WanderState {
    pub fn new(angle: f64) -> Self {
        Self { angle, timer: 0 }
    }
}

pub fn random_angle<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * TAU
}

/// Heading from the head straight at the pointer. `pointer` is in pixels.
pub fn player_heading(head: Point, pointer: Point, cell_size: f64) -> f64 {
    let target = Point {
        x: pointer.x / cell_size,
        y: pointer.y / cell_size,
    };
    angle_to(head, target)
}

/// Wander with a periodic random re-roll, occasionally pulled toward the nearest food.
pub fn bot_heading<R: Rng + ?Sized>(
    wander: &mut WanderState,
    head: Point,
    food: &[Point],
    rng: &mut R,
) -> f64 {
    wander.timer += 1;
    if wander.timer >= WANDER_INTERVAL_TICKS {
        wander.angle = random_angle(rng);
        wander.timer = 0;
    }

    if !food.is_empty() && rng.gen::<f64>() < SEEK_CHANCE {
        if let Some(index) = nearest_index(head, food.iter().copied()) {
            let target = angle_to(head, food[index]);
            wander.angle = blend_angle(wander.angle, target);
        }
    }

    wander.angle
}

// Linear blend of raw radians, no shortest-arc handling.
pub fn blend_angle(current: f64, target: f64) -> f64 {
    current * (1.0 - SEEK_BLEND) + target * SEEK_BLEND
}
