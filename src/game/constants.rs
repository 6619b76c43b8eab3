pub const STARTING_LENGTH: usize = 15;
pub const PLAYER_SPEED: f64 = 0.5;
pub const BOT_SPEED: f64 = 0.2;
pub const BOT_COUNT: usize = 4;

pub const BASE_RADIUS: u32 = 6;
pub const MAX_RADIUS: u32 = 10;
pub const SCORE_PER_RADIUS_STEP: u32 = 20;

pub const MAX_FOOD: usize = 40;
pub const INITIAL_FOOD: usize = 30;
pub const PICKUP_DISTANCE: f64 = 2.0;
pub const COLLISION_DISTANCE: f64 = 1.0;
pub const DEATH_DROP_CHANCE: f64 = 0.3;

pub const WANDER_INTERVAL_TICKS: u32 = 50;
pub const SEEK_CHANCE: f64 = 0.2;
pub const SEEK_BLEND: f64 = 0.05;

pub const INVULNERABILITY_TICKS: u64 = 300;
pub const MAX_SPAWN_ATTEMPTS: usize = 32;
pub const BOT_COLOR_MIN: u8 = 50;

pub const LEADERBOARD_SIZE: usize = 5;
pub const MIN_BODY_DRAW_RADIUS: u32 = 4;
pub const BODY_FADE: f64 = 0.3;
