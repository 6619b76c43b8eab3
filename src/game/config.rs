use super::types::{Color, FoodTier};
use crate::shared::names::sanitize_player_name;

pub const DEFAULT_PLAYER_NAME: &str = "You";

pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const GOLD: Color = Color::rgb(255, 215, 0);
pub const ORANGE: Color = Color::rgb(255, 69, 0);

/// Geometry and palette shared by the session and whatever draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Side of the square window, in pixels.
    pub window_size: u32,
    /// Side of one grid cell, in pixels.
    pub cell_size: u32,
    pub player_color: Color,
    pub player_name: String,
    /// Food colors by tier: small, medium, large.
    pub food_colors: [Color; 3],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_size: 1200,
            cell_size: 12,
            player_color: GREEN,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            food_colors: [WHITE, GOLD, ORANGE],
        }
    }
}

impl GameConfig {
    pub fn with_player_name(mut self, name: &str) -> Self {
        self.player_name = sanitize_player_name(name, DEFAULT_PLAYER_NAME);
        self
    }

    /// Number of cells along each axis.
    pub fn grid_cells(&self) -> u32 {
        (self.window_size / self.cell_size.max(1)).max(1)
    }

    pub fn grid_extent(&self) -> f64 {
        self.grid_cells() as f64
    }

    pub fn food_color(&self, tier: FoodTier) -> Color {
        match tier {
            FoodTier::Small => self.food_colors[0],
            FoodTier::Medium => self.food_colors[1],
            FoodTier::Large => self.food_colors[2],
        }
    }
}
