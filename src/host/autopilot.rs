use crate::game::math::nearest_index;
use crate::game::session::Session;
use crate::game::types::{GameState, Point};

/// Pixel-space pointer aimed at the food closest to the player's head.
pub fn pointer(session: &Session) -> Option<Point> {
    let head = session.player().segments.front().copied()?;
    let food = session.food().positions();
    let index = nearest_index(head, food.iter().copied())?;
    let cell = session.config().cell_size as f64;
    Some(Point {
        x: food[index].x * cell,
        y: food[index].y * cell,
    })
}

/// Clicks through the title screen, then restarts until `max_rounds` have been played.
pub fn wants_click(state: GameState, rounds_played: u32, max_rounds: u32) -> bool {
    match state {
        GameState::Start => true,
        GameState::Playing => false,
        GameState::Win | GameState::GameOver => rounds_played < max_rounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::GameConfig;
    use crate::game::math::distance;

    #[test]
    fn pointer_targets_nearest_food_in_pixels() {
        let session = Session::new(GameConfig::default(), Some(21));
        let target = pointer(&session).expect("food is spawned at start");
        let head = session.player().head();
        let target_cell = Point {
            x: target.x / 12.0,
            y: target.y / 12.0,
        };
        let nearest = distance(head, target_cell);
        for food in session.food().items() {
            assert!(distance(head, food.position) >= nearest);
        }
    }

    #[test]
    fn clicks_only_on_menu_screens() {
        assert!(wants_click(GameState::Start, 0, 1));
        assert!(!wants_click(GameState::Playing, 0, 1));
        assert!(wants_click(GameState::GameOver, 0, 1));
        assert!(!wants_click(GameState::Win, 1, 1));
    }
}
