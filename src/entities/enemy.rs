use super::geometry::Aabb;
use crate::config::GameConfig;

/// One invader in the formation grid.
///
/// Killed enemies stay in the collection with `alive == false` until the
/// next reset, so grid indices stay stable for the whole wave.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            alive: true,
        }
    }

    /// Lay out a full rows x columns grid, row-major, top row first
    pub fn spawn_grid(config: &GameConfig) -> Vec<Enemy> {
        let mut enemies = Vec::with_capacity(config.grid_size());
        for row in 0..config.enemy_rows {
            for col in 0..config.enemy_cols {
                let x = config.enemy_start_x + col as f32 * config.enemy_x_gap;
                let y = config.enemy_start_y + row as f32 * config.enemy_y_gap;
                enemies.push(Enemy::new(x, y, config.enemy_width, config.enemy_height));
            }
        }
        enemies
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center(self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }
}
