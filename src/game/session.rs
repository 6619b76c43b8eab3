use super::collision::resolve;
use super::config::GameConfig;
use super::constants::{
  BOT_COLOR_MIN, BOT_COUNT, INITIAL_FOOD, INVULNERABILITY_TICKS, LEADERBOARD_SIZE,
  MAX_SPAWN_ATTEMPTS,
};
use super::food::FoodPool;
use super::input::{RequestedAction, TickInput};
use super::math::distance;
use super::render::food_view;
use super::snake::Snake;
use super::steering::random_angle;
use super::types::{Color, EntityId, GameState, LeaderboardEntry, Point, RenderModel};
use crate::shared::names::bot_name;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns every snake and all food; the only thing that mutates them.
#[derive(Debug)]
pub struct Session {
  config: GameConfig,
  rng: StdRng,
  state: GameState,
  /// Index 0 is the player, the rest are bots.
  snakes: Vec<Snake>,
  food: FoodPool,
  game_time: u64,
}

impl Session {
  pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
    let rng = match seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    let mut session = Self {
      config,
      rng,
      state: GameState::Start,
      snakes: Vec::with_capacity(BOT_COUNT + 1),
      food: FoodPool::new(),
      game_time: 0,
    };
    session.init_game();
    session
  }

  pub fn state(&self) -> GameState {
    self.state
  }

  #[cfg(test)]
  pub fn game_time(&self) -> u64 {
    self.game_time
  }

  pub fn config(&self) -> &GameConfig {
    &self.config
  }

  pub fn player(&self) -> &Snake {
    &self.snakes[EntityId::PLAYER.0]
  }

  pub fn bots(&self) -> &[Snake] {
    &self.snakes[1..]
  }

  pub fn food(&self) -> &FoodPool {
    &self.food
  }

  /// Discards everything and builds a fresh round.
  pub fn init_game(&mut self) {
    let cells = self.config.grid_cells();
    let extent = self.config.grid_extent();
    let center = Point {
      x: (cells / 2) as f64,
      y: (cells / 2) as f64,
    };

    self.snakes.clear();
    let wander = random_angle(&mut self.rng);
    self.snakes.push(Snake::new(
      self.config.player_name.clone(),
      center,
      self.config.player_color,
      false,
      wander,
      extent,
    ));
    for index in 0..BOT_COUNT {
      let start = place_bot(center, cells, &mut self.rng);
      let color = random_bot_color(&mut self.rng);
      let wander = random_angle(&mut self.rng);
      self
        .snakes
        .push(Snake::new(bot_name(index), start, color, true, wander, extent));
    }

    self.food.clear();
    self.food.spawn(INITIAL_FOOD, cells, &mut self.rng);
    self.game_time = 0;
    tracing::debug!(bots = BOT_COUNT, food = self.food.len(), "round initialized");
  }

  pub fn tick(&mut self, input: TickInput) -> RenderModel {
    let next = match (self.state, input.action) {
      (GameState::Playing, _) => {
        self.step(input.pointer);
        evaluate_round(&self.snakes)
      }
      (GameState::Start, RequestedAction::Start)
      | (GameState::Win | GameState::GameOver, RequestedAction::Restart) => {
        self.init_game();
        GameState::Playing
      }
      (state, RequestedAction::None) => state,
      (state, action) => {
        tracing::debug!(?state, ?action, "ignoring action for current state");
        state
      }
    };
    self.transition(next);
    self.render_model()
  }

  fn step(&mut self, pointer: Option<Point>) {
    self.game_time += 1;

    let food_positions = self.food.positions();
    for snake in &mut self.snakes {
      snake.advance(&food_positions, pointer, &self.config, &mut self.rng);
    }

    let cells = self.config.grid_cells();
    for index in 0..self.snakes.len() {
      if !self.snakes[index].alive {
        continue;
      }
      let resolution = resolve(
        EntityId(index),
        &mut self.snakes,
        &mut self.food,
        cells,
        &mut self.rng,
      );
      if !resolution.eaten.is_empty() {
        tracing::trace!(
          entity = index,
          eaten = resolution.eaten.len(),
          growth = resolution.growth,
          "food eaten"
        );
      }
    }
  }

  fn transition(&mut self, next: GameState) {
    if next == self.state {
      return;
    }
    tracing::info!(
      from = ?self.state,
      to = ?next,
      game_time = self.game_time,
      score = self.player().score,
      "game state changed"
    );
    self.state = next;
  }

  pub fn render_model(&self) -> RenderModel {
    RenderModel {
      state: self.state,
      game_time: self.game_time,
      invulnerable: self.state == GameState::Playing && self.game_time < INVULNERABILITY_TICKS,
      player: self.player().view(),
      bots: self.bots().iter().map(Snake::view).collect(),
      food: self
        .food
        .items()
        .iter()
        .map(|food| food_view(food, &self.config))
        .collect(),
      leaderboard: self.leaderboard(),
    }
  }

  /// The player plus every living bot, best first.
  pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = std::iter::once(self.player())
      .chain(self.bots().iter().filter(|bot| bot.alive))
      .map(|snake| LeaderboardEntry {
        name: snake.name.clone(),
        score: snake.score,
        color: snake.color,
      })
      .collect();
    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| b.name.cmp(&a.name)));
    entries.truncate(LEADERBOARD_SIZE);
    entries
  }
}

/// Round outcome after all movement and collisions. The player's death wins over
/// everything else; a win needs the player to be the only snake left.
pub fn evaluate_round(snakes: &[Snake]) -> GameState {
  let player_alive = snakes
    .get(EntityId::PLAYER.0)
    .map(|player| player.alive)
    .unwrap_or(false);
  if !player_alive {
    return GameState::GameOver;
  }
  let alive = snakes.iter().filter(|snake| snake.alive).count();
  if alive == 1 {
    GameState::Win
  } else {
    GameState::Playing
  }
}

/// Random cell at least a quarter of the grid away from `player_start`. Gives up after
/// `MAX_SPAWN_ATTEMPTS` samples and keeps the last one.
pub fn place_bot<R: Rng + ?Sized>(player_start: Point, cells: u32, rng: &mut R) -> Point {
  let min_distance = (cells / 4) as f64;
  let mut candidate = random_cell(cells, rng);
  for _ in 1..MAX_SPAWN_ATTEMPTS {
    if distance(candidate, player_start) >= min_distance {
      return candidate;
    }
    candidate = random_cell(cells, rng);
  }
  candidate
}

fn random_cell<R: Rng + ?Sized>(cells: u32, rng: &mut R) -> Point {
  Point {
    x: rng.gen_range(0..cells) as f64,
    y: rng.gen_range(0..cells) as f64,
  }
}

fn random_bot_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
  Color::rgb(
    rng.gen_range(BOT_COLOR_MIN..=u8::MAX),
    rng.gen_range(BOT_COLOR_MIN..=u8::MAX),
    rng.gen_range(BOT_COLOR_MIN..=u8::MAX),
  )
}
