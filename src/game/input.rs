use super::types::{GameState, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestedAction {
    #[default]
    None,
    Start,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    /// Pointer in window pixels.
    pub pointer: Option<Point>,
    pub action: RequestedAction,
}

impl TickInput {
    /// Maps a click to the action the current screen offers.
    pub fn from_click(state: GameState, pointer: Option<Point>, clicked: bool) -> Self {
        let action = match (state, clicked) {
            (_, false) | (GameState::Playing, true) => RequestedAction::None,
            (GameState::Start, true) => RequestedAction::Start,
            (GameState::Win | GameState::GameOver, true) => RequestedAction::Restart,
        };
        Self {
            pointer: pointer.and_then(parse_pointer),
            action,
        }
    }
}

pub fn parse_pointer(value: Point) -> Option<Point> {
    if !value.x.is_finite() || !value.y.is_finite() {
        return None;
    }
    Some(value)
}
