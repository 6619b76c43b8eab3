use super::config::GameConfig;
use super::constants::{BODY_FADE, MIN_BODY_DRAW_RADIUS};
use super::types::{Color, Food, FoodView, SegmentStyle};

/// Draw radius and color of one body segment: a slightly larger head, then a body that
/// darkens toward the tail.
pub fn segment_style(radius: u32, color: Color, len: usize, index: usize) -> SegmentStyle {
    if index == 0 {
        return SegmentStyle {
            radius: radius + 1,
            color,
        };
    }
    let fade = (index as f64 / len.max(1) as f64).min(1.0);
    SegmentStyle {
        radius: radius.saturating_sub(1).max(MIN_BODY_DRAW_RADIUS),
        color: color.scaled(1.0 - fade * BODY_FADE),
    }
}

pub fn segment_styles(radius: u32, color: Color, len: usize) -> Vec<SegmentStyle> {
    (0..len)
        .map(|index| segment_style(radius, color, len, index))
        .collect()
}

pub fn food_view(food: &Food, config: &GameConfig) -> FoodView {
    FoodView {
        position: food.position,
        tier: food.tier,
        radius: food.tier.draw_radius(),
        color: config.food_color(food.tier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{FoodTier, Point};

    const ORANGE: Color = Color::rgb(200, 100, 0);

    #[test]
    fn head_is_drawn_larger_than_body() {
        assert_eq!(segment_style(6, ORANGE, 10, 0).radius, 7);
        assert_eq!(segment_style(6, ORANGE, 10, 0).color, ORANGE);
        assert_eq!(segment_style(6, ORANGE, 10, 1).radius, 5);
        assert_eq!(segment_style(4, ORANGE, 10, 3).radius, MIN_BODY_DRAW_RADIUS);
    }

    #[test]
    fn body_fades_toward_the_tail() {
        let mid = segment_style(8, ORANGE, 10, 5).color;
        assert_eq!(mid, Color::rgb(170, 85, 0));
        let tail = segment_style(8, ORANGE, 10, 9).color;
        assert!(tail.r < mid.r);
    }

    #[test]
    fn one_style_per_segment() {
        let styles = segment_styles(6, ORANGE, 4);
        assert_eq!(styles.len(), 4);
        assert_eq!(styles[0], segment_style(6, ORANGE, 4, 0));
        assert_eq!(styles[3], segment_style(6, ORANGE, 4, 3));
        assert!(segment_styles(6, ORANGE, 0).is_empty());
    }

    #[test]
    fn food_view_uses_tier_palette() {
        let config = GameConfig::default();
        let food = Food {
            position: Point { x: 3.0, y: 4.0 },
            tier: FoodTier::Large,
        };
        let view = food_view(&food, &config);
        assert_eq!(view.radius, 5);
        assert_eq!(view.color, config.food_colors[2]);
        assert_eq!(view.position, food.position);
    }
}
