use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Color {
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  pub fn scaled(self, factor: f64) -> Self {
    let channel = |value: u8| (value as f64 * factor).round().clamp(0.0, 255.0) as u8;
    Self {
      r: channel(self.r),
      g: channel(self.g),
      b: channel(self.b),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodTier {
  Small,
  Medium,
  Large,
}

impl FoodTier {
  pub const ALL: [FoodTier; 3] = [FoodTier::Small, FoodTier::Medium, FoodTier::Large];

  pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
    Self::ALL[rng.gen_range(0..Self::ALL.len())]
  }

  pub fn growth(self) -> u32 {
    match self {
      FoodTier::Small => 1,
      FoodTier::Medium => 2,
      FoodTier::Large => 3,
    }
  }

  pub fn draw_radius(self) -> u32 {
    match self {
      FoodTier::Small => 3,
      FoodTier::Medium => 4,
      FoodTier::Large => 5,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
  pub position: Point,
  pub tier: FoodTier,
}

/// Arena index of a snake inside the session. The player is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub usize);

impl EntityId {
  pub const PLAYER: EntityId = EntityId(0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
  Start,
  Playing,
  Win,
  GameOver,
}

/// How one body segment is drawn. Index 0 is the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentStyle {
  pub radius: u32,
  pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
  pub segments: Vec<Point>,
  /// Parallel to `segments`.
  pub styles: Vec<SegmentStyle>,
  pub heading: f64,
  pub radius: u32,
  pub color: Color,
  pub alive: bool,
  pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodView {
  pub position: Point,
  pub tier: FoodTier,
  pub radius: u32,
  pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
  pub name: String,
  pub score: u32,
  pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
  pub state: GameState,
  #[serde(rename = "gameTime")]
  pub game_time: u64,
  pub invulnerable: bool,
  pub player: EntityView,
  pub bots: Vec<EntityView>,
  pub food: Vec<FoodView>,
  pub leaderboard: Vec<LeaderboardEntry>,
}
