use super::geometry::Aabb;
use crate::config::GameConfig;

/// Horizontal intent for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Idle,
    Right,
}

impl Direction {
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Idle => 0.0,
            Direction::Right => 1.0,
        }
    }
}

/// The player's ship. Its position is the center of its box; y never
/// changes after spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub lives: u32,
    screen_width: f32,
}

impl Player {
    /// Spawn centered horizontally on the baseline near the bottom of the screen
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.screen_width / 2.0,
            y: config.screen_height - config.player_y_offset,
            width: config.player_width,
            height: config.player_height,
            speed: config.player_speed,
            lives: config.player_lives,
            screen_width: config.screen_width,
        }
    }

    pub fn move_by(&mut self, direction: Direction) {
        self.x += direction.sign() * self.speed;
        let half_width = self.width / 2.0;
        self.x = self.x.clamp(half_width, self.screen_width - half_width);
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center(self.x, self.y, self.width, self.height)
    }

    /// Vertical threshold enemies must not reach
    pub fn defense_line(&self) -> f32 {
        self.y - self.height / 2.0
    }

    /// Spawn point for a shot, `gap` units above the ship's nose
    pub fn muzzle(&self, gap: f32) -> (f32, f32) {
        (self.x, self.y - self.height / 2.0 - gap)
    }

    /// Lose one life, never going below zero. Returns true once no lives remain.
    pub fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        !self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}
