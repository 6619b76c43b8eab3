use super::config::GameConfig;
use super::constants::{
    BASE_RADIUS, BOT_SPEED, MAX_RADIUS, PLAYER_SPEED, SCORE_PER_RADIUS_STEP, STARTING_LENGTH,
};
use super::math::{in_bounds, step, wrap};
use super::render::segment_styles;
use super::steering::{bot_heading, player_heading, WanderState};
use super::types::{Color, EntityView, Point};
use rand::Rng;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Snake {
    pub name: String,
    pub color: Color,
    pub is_bot: bool,
    pub segments: VecDeque<Point>,
    pub heading: f64,
    pub length: usize,
    pub score: u32,
    pub radius: u32,
    pub alive: bool,
    pub wander: WanderState,
}

pub fn radius_for_score(score: u32) -> u32 {
    (BASE_RADIUS + score / SCORE_PER_RADIUS_STEP).min(MAX_RADIUS)
}

/// Builds a body of `length` nodes trailing one cell at a time to the left of `head`.
pub fn create_body(head: Point, length: usize, extent: f64) -> VecDeque<Point> {
    (0..length.max(1))
        .map(|offset| {
            wrap(
                Point {
                    x: head.x - offset as f64,
                    y: head.y,
                },
                extent,
            )
        })
        .collect()
}

impl Snake {
    pub fn new(
        name: String,
        head: Point,
        color: Color,
        is_bot: bool,
        wander_angle: f64,
        extent: f64,
    ) -> Self {
        Self {
            name,
            color,
            is_bot,
            segments: create_body(head, STARTING_LENGTH, extent),
            heading: 0.0,
            length: STARTING_LENGTH,
            score: 0,
            radius: radius_for_score(0),
            alive: true,
            wander: WanderState::new(wander_angle),
        }
    }

    pub fn head(&self) -> Point {
        assert!(!self.segments.is_empty(), "snake body must never be empty");
        self.segments[0]
    }

    pub fn speed(&self) -> f64 {
        if self.is_bot {
            BOT_SPEED
        } else {
            PLAYER_SPEED
        }
    }

    /// Steers and moves one tick. Bots steer themselves; the player needs a pointer.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        food: &[Point],
        pointer: Option<Point>,
        config: &GameConfig,
        rng: &mut R,
    ) {
        if !self.alive {
            return;
        }
        let head = self.head();
        let heading = if self.is_bot {
            bot_heading(&mut self.wander, head, food, rng)
        } else if let Some(pointer) = pointer {
            player_heading(head, pointer, config.cell_size as f64)
        } else {
            return;
        };
        self.move_along(heading, config.grid_extent());
    }

    pub fn move_along(&mut self, heading: f64, extent: f64) {
        self.heading = heading;
        let next = wrap(step(self.head(), heading, self.speed()), extent);
        debug_assert!(in_bounds(next, extent));
        self.segments.push_front(next);
        while self.segments.len() > self.length {
            self.segments.pop_back();
        }
    }

    pub fn grow(&mut self, amount: u32) {
        self.length += amount as usize;
        self.score += amount;
        self.radius = radius_for_score(self.score);
    }

    /// Marks the snake dead. Returns false when it already was.
    pub fn eliminate(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        true
    }

    pub fn view(&self) -> EntityView {
        EntityView {
            segments: self.segments.iter().copied().collect(),
            styles: segment_styles(self.radius, self.color, self.segments.len()),
            heading: self.heading,
            radius: self.radius,
            color: self.color,
            alive: self.alive,
            score: self.score,
        }
    }
}
