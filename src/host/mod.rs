use crate::game::config::{GameConfig, DEFAULT_PLAYER_NAME};
use crate::game::input::TickInput;
use crate::game::session::Session;
use crate::game::types::{GameState, RenderModel};
use std::env;
use std::io::Write;
use std::str::FromStr;

pub mod autopilot;

const DEFAULT_TICK_MS: u64 = 16;
const DEFAULT_MAX_TICKS: u64 = 3600;
const DEFAULT_MAX_ROUNDS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct HostSettings {
  pub seed: Option<u64>,
  pub tick_ms: u64,
  pub max_ticks: u64,
  pub max_rounds: u32,
  pub player_name: String,
  pub frame_dump: bool,
}

impl HostSettings {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    Self {
      seed: parse_var(&lookup, "SEED"),
      tick_ms: parse_var(&lookup, "TICK_MS").unwrap_or(DEFAULT_TICK_MS).max(1),
      max_ticks: parse_var(&lookup, "MAX_TICKS").unwrap_or(DEFAULT_MAX_TICKS),
      max_rounds: parse_var(&lookup, "MAX_ROUNDS").unwrap_or(DEFAULT_MAX_ROUNDS).max(1),
      player_name: lookup("PLAYER_NAME").unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
      frame_dump: lookup("FRAME_DUMP")
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE"))
        .unwrap_or(false),
    }
  }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
  T: FromStr,
  F: Fn(&str) -> Option<String>,
{
  lookup(key).and_then(|value| value.trim().parse().ok())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
  pub ticks: u64,
  pub rounds_played: u32,
}

impl RunSummary {
  /// Counts one frame. Returns true once `max_rounds` rounds have finished.
  fn record(&mut self, before: GameState, model: &RenderModel, max_rounds: u32) -> bool {
    self.ticks += 1;
    if before != GameState::Playing || model.state == GameState::Playing {
      return false;
    }
    self.rounds_played += 1;
    tracing::info!(
      round = self.rounds_played,
      outcome = ?model.state,
      ticks = model.game_time,
      score = model.player.score,
      "round finished"
    );
    self.rounds_played >= max_rounds
  }
}

/// Drives a session at a fixed cadence until the tick or round budget runs out or
/// the process is interrupted.
pub async fn run(settings: HostSettings) -> anyhow::Result<RunSummary> {
  let config = GameConfig::default().with_player_name(&settings.player_name);
  let mut session = Session::new(config, settings.seed);
  let mut interval = tokio::time::interval(std::time::Duration::from_millis(settings.tick_ms));
  let shutdown = tokio::signal::ctrl_c();
  tokio::pin!(shutdown);

  let mut summary = RunSummary::default();
  while summary.ticks < settings.max_ticks {
    tokio::select! {
      _ = interval.tick() => {}
      _ = &mut shutdown => {
        tracing::info!(rounds_played = summary.rounds_played, "interrupted");
        break;
      }
    }

    let state = session.state();
    let clicked = autopilot::wants_click(state, summary.rounds_played, settings.max_rounds);
    let pointer = autopilot::pointer(&session);
    let model = session.tick(TickInput::from_click(state, pointer, clicked));

    if settings.frame_dump {
      let line = serde_json::to_string(&model)?;
      writeln!(std::io::stdout(), "{line}")?;
    }

    if summary.record(state, &model, settings.max_rounds) {
      break;
    }
  }

  Ok(summary)
}
