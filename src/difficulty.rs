use serde::{Deserialize, Serialize};

/// Generation and win parameters for one level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultySpec {
    pub color_count: usize,
    pub extra_empty_tubes: usize,
    pub shuffle_move_count: u32,
    /// Advisory only. The generator applies its own level gate and count.
    pub locked_ball_count: usize,
    pub difficulty_modifier: f32,
    pub tubes_required_to_win: usize,
}

impl DifficultySpec {
    pub fn total_tubes(&self, purchased_tubes: usize) -> usize {
        self.color_count + self.extra_empty_tubes + purchased_tubes
    }
}

/// The difficulty curve. Levels start at 1; level 0 is treated as level 1.
pub fn level_difficulty(level: u32) -> DifficultySpec {
    let level = level.max(1);

    let color_count = match level {
        1..=5 => 4,
        6..=10 => 5,
        11..=20 => 7,
        21..=30 => 10,
        31..=40 => 12,
        _ => 15,
    };

    let extra_empty_tubes = if level <= 5 { 2 } else { 1 };

    let difficulty_modifier = match level {
        1..=20 => 0.0,
        21..=30 => 0.1,
        31..=40 => 0.2,
        _ => 0.3,
    };

    let tubes_required_to_win = match level {
        10..=30 => 5,
        _ if level > 30 && color_count > 5 => (color_count / 2).min(5),
        _ => color_count,
    }
    .min(color_count);

    DifficultySpec {
        color_count,
        extra_empty_tubes,
        shuffle_move_count: 80 + level * 10,
        locked_ball_count: (((level - 1) / 2 + 1) as usize).min(10),
        difficulty_modifier,
        tubes_required_to_win,
    }
}
